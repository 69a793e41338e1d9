use super::TestReporter;
use crate::{details::TestDetails, result::Failure, results::TestResults};
use core::{
    fmt::{self, Write},
    time::Duration,
};

const RUN_SEPARATOR: &str = "[===========]";
const SUITE_SEPARATOR: &str = "[   SUITE   ]";
const FIXTURE_SEPARATOR: &str = "[  FIXTURE  ]";
const SUCCESS_SEPARATOR: &str = "[ SUCCEEDED ]";
const FAIL_SEPARATOR: &str = "[  FAILED   ]";

#[derive(Debug, Copy, Clone)]
enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    fn sgr(self) -> &'static str {
        match self {
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::Cyan => "\x1b[0;36m",
        }
    }
}

const RESET: &str = "\x1b[0m";

fn plural(count: usize, singular: &'static str, plural: &'static str) -> Plural {
    Plural {
        count,
        word: if count == 1 { singular } else { plural },
    }
}

struct Plural {
    count: usize,
    word: &'static str,
}

impl fmt::Display for Plural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.word)
    }
}

fn tests(count: usize) -> Plural {
    plural(count, "test", "tests")
}

fn fixtures(count: usize) -> Plural {
    plural(count, "test fixture", "test fixtures")
}

fn suites(count: usize) -> Plural {
    plural(count, "test suite", "test suites")
}

fn failures(count: usize) -> Plural {
    plural(count, "failure", "failures")
}

/// A reporter writing a human readable report to a character sink.
///
/// Every event is written as soon as it arrives. Write errors are ignored.
#[derive(Debug)]
pub struct ConsoleTestReporter<W: Write> {
    w: W,
    color: bool,
}

impl<W: Write> ConsoleTestReporter<W> {
    /// Create a reporter writing to `w`, with ANSI colours enabled.
    pub fn new(w: W) -> Self {
        Self { w, color: true }
    }

    /// Enable or disable ANSI colours.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Consume the reporter and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.w
    }

    fn set_color(&mut self, color: Color) -> fmt::Result {
        if self.color {
            self.w.write_str(color.sgr())?;
        }
        Ok(())
    }

    fn reset_color(&mut self) -> fmt::Result {
        if self.color {
            self.w.write_str(RESET)?;
        }
        Ok(())
    }

    fn write_line(
        &mut self,
        separator: &str,
        color: Color,
        message: fmt::Arguments<'_>,
    ) -> fmt::Result {
        self.set_color(color)?;
        self.w.write_str(separator)?;
        self.reset_color()?;
        writeln!(self.w, " {}", message)
    }

    fn write_failure(&mut self, details: &TestDetails, failure: &Failure) -> fmt::Result {
        writeln!(
            self.w,
            "{}:{} : Failure in {}: {}",
            details.file_name(),
            failure.line_number(),
            details.qualified_name(),
            failure.message()
        )
    }

    fn write_summary(&mut self, results: &TestResults) -> fmt::Result {
        if results.failure_count() > 0 {
            self.set_color(Color::Red)?;
            writeln!(
                self.w,
                "FAILURE: {} out of {} tests failed ({}).",
                results.failed_test_count(),
                results.test_count(),
                failures(results.failure_count())
            )?;
        } else {
            self.set_color(Color::Green)?;
            writeln!(self.w, "Success: {} passed.", tests(results.test_count()))?;
        }
        writeln!(self.w, "Test time: {} ms.", results.elapsed().as_millis())?;
        self.reset_color()
    }

    fn write_overview(&mut self, results: &TestResults) -> fmt::Result {
        if results.failure_count() == 0 {
            return self.w.write_str("No failures\n");
        }
        self.w.write_str("Failures:\n")?;
        for result in results.results().iter().filter(|result| result.failed()) {
            for failure in result.failures() {
                self.write_failure(result.details(), failure)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> TestReporter for ConsoleTestReporter<W> {
    fn test_run_starting(&mut self, suite_count: usize, fixture_count: usize, test_count: usize) {
        let _ = self.write_line(
            RUN_SEPARATOR,
            Color::Green,
            format_args!(
                "Running {} from {} in {}.",
                tests(test_count),
                fixtures(fixture_count),
                suites(suite_count)
            ),
        );
    }

    fn test_run_ended(
        &mut self,
        suite_count: usize,
        fixture_count: usize,
        test_count: usize,
        elapsed: Duration,
    ) {
        let _ = self.write_line(
            RUN_SEPARATOR,
            Color::Green,
            format_args!(
                "{} from {} in {} ran. ({} ms total)",
                tests(test_count),
                fixtures(fixture_count),
                suites(suite_count),
                elapsed.as_millis()
            ),
        );
    }

    fn test_run_summary(&mut self, results: &TestResults) {
        let _ = self.write_summary(results);
    }

    fn test_run_overview(&mut self, results: &TestResults) {
        let _ = self.write_overview(results);
    }

    fn test_suite_starting(&mut self, name: &str, fixture_count: usize) {
        let _ = self.write_line(
            SUITE_SEPARATOR,
            Color::Cyan,
            format_args!("{} ({})", name, fixtures(fixture_count)),
        );
    }

    fn test_suite_ended(&mut self, name: &str, fixture_count: usize, elapsed: Duration) {
        let _ = self.write_line(
            SUITE_SEPARATOR,
            Color::Cyan,
            format_args!(
                "{} from {} ({} ms total)",
                fixtures(fixture_count),
                name,
                elapsed.as_millis()
            ),
        );
    }

    fn test_fixture_starting(&mut self, name: &str, test_count: usize) {
        let _ = self.write_line(
            FIXTURE_SEPARATOR,
            Color::Yellow,
            format_args!("{} ({})", name, tests(test_count)),
        );
    }

    fn test_fixture_ended(&mut self, name: &str, test_count: usize, elapsed: Duration) {
        let _ = self.write_line(
            FIXTURE_SEPARATOR,
            Color::Yellow,
            format_args!(
                "{} from {} ({} ms total)",
                tests(test_count),
                name,
                elapsed.as_millis()
            ),
        );
    }

    fn test_case_starting(&mut self, _: &TestDetails) {}

    fn test_case_ended(&mut self, details: &TestDetails, success: bool, elapsed: Duration) {
        let _ = if success {
            self.write_line(
                SUCCESS_SEPARATOR,
                Color::Green,
                format_args!("{} ({} ms)", details.qualified_name(), elapsed.as_millis()),
            )
        } else {
            self.write_line(
                FAIL_SEPARATOR,
                Color::Red,
                format_args!(
                    "{} at {}:{} ({} ms)",
                    details.qualified_name(),
                    details.file_name(),
                    details.line_number(),
                    elapsed.as_millis()
                ),
            )
        };
    }

    fn test_case_failed(&mut self, details: &TestDetails, failure: &Failure) {
        let _ = self.write_failure(details, failure);
    }
}

/// A character sink writing to the standard output.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdoutConsole {
    _p: (),
}

#[cfg(feature = "std")]
impl StdoutConsole {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

#[cfg(feature = "std")]
impl Write for StdoutConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(s.as_bytes())
            .and_then(|()| lock.flush())
            .map_err(|_| fmt::Error)
    }
}
