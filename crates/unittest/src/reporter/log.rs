use super::TestReporter;
use crate::{details::TestDetails, result::Failure, results::TestResults};
use core::time::Duration;

/// A reporter forwarding the events of a run to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    #[allow(clippy::new_without_default)]
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

fn plural_suffix(n: usize) -> &'static str {
    match n {
        1 => "",
        _ => "s",
    }
}

impl TestReporter for LogReporter {
    fn test_run_starting(&mut self, suites: usize, fixtures: usize, tests: usize) {
        log::info!(
            "running {} test{} from {} fixture{} in {} suite{}",
            tests,
            plural_suffix(tests),
            fixtures,
            plural_suffix(fixtures),
            suites,
            plural_suffix(suites)
        );
    }

    fn test_run_ended(&mut self, _: usize, _: usize, tests: usize, elapsed: Duration) {
        log::info!(
            "{} test{} ran in {} ms",
            tests,
            plural_suffix(tests),
            elapsed.as_millis()
        );
    }

    fn test_run_summary(&mut self, results: &TestResults) {
        if results.is_success() {
            log::info!("test status: ok");
        } else {
            log::error!(
                "test status: FAILED ({} of {} tests, {} failure{})",
                results.failed_test_count(),
                results.test_count(),
                results.failure_count(),
                plural_suffix(results.failure_count())
            );
        }
    }

    fn test_run_overview(&mut self, _: &TestResults) {}

    fn test_suite_starting(&mut self, name: &str, _: usize) {
        log::debug!("suite: {}", name);
    }

    fn test_suite_ended(&mut self, _: &str, _: usize, _: Duration) {}

    fn test_fixture_starting(&mut self, name: &str, _: usize) {
        log::debug!("fixture: {}", name);
    }

    fn test_fixture_ended(&mut self, _: &str, _: usize, _: Duration) {}

    fn test_case_starting(&mut self, details: &TestDetails) {
        log::info!("start: {}", details.qualified_name());
    }

    fn test_case_ended(&mut self, details: &TestDetails, success: bool, _: Duration) {
        if success {
            log::info!("{}: ok", details.qualified_name());
        } else {
            log::error!("{}: FAILED", details.qualified_name());
        }
    }

    fn test_case_failed(&mut self, details: &TestDetails, failure: &Failure) {
        log::error!(
            "{}:{}: {}",
            details.file_name(),
            failure.line_number(),
            failure.message()
        );
    }
}
