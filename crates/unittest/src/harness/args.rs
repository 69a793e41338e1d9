//! Definition of command line interface.

use super::ExitStatus;
use crate::runner::Selection;
use getopts::Options;
use std::{path::Path, str::FromStr};

/// Command line arguments.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) list_tests: bool,
    pub(crate) suite: Option<String>,
    pub(crate) fixture: Option<String>,
    pub(crate) test: Option<String>,
    pub(crate) color: ColorConfig,
}

impl Args {
    /// Parse command line arguments.
    pub(crate) fn from_env() -> Result<Self, ExitStatus> {
        let args: Vec<_> = std::env::args().collect();
        let parser = Parser::new(&args[..]);
        match parser.parse() {
            Ok(Some(args)) => Ok(args),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }

    pub(crate) fn selection(&self) -> Selection<'_> {
        let mut selection = Selection::all();
        if let Some(ref suite) = self.suite {
            selection = selection.suite(suite);
        }
        if let Some(ref fixture) = self.fixture {
            selection = selection.fixture(fixture);
        }
        if let Some(ref test) = self.test {
            selection = selection.test(test);
        }
        selection
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ColorConfig {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorConfig {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(format!(
                "argument for --color must be auto, always, or never (was {})",
                v
            )
            .into()),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List the selected tests instead of running them");
        opts.optopt("", "suite", "Only run tests in the suite named NAME", "NAME");
        opts.optopt(
            "",
            "fixture",
            "Only run tests in fixtures named NAME",
            "NAME",
        );
        opts.optopt("", "test", "Only run tests named NAME", "NAME");
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );

        // The following options and flags are reserved for keeping the compatibility with
        // the built-in test harness.
        opts.optflag("", "ignored", "");
        opts.optflag("", "bench", "");
        opts.optflag("", "nocapture", "");
        opts.optflag("", "exact", "");
        opts.optflag("q", "quiet", "");
        opts.optopt("", "logfile", "", "PATH");
        opts.optopt("", "test-threads", "", "n_threads");
        opts.optopt("", "format", "", "");
        opts.optopt("Z", "", "", "unstable-options");

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.get(0).map_or("test", String::as_str);
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS]", progname);
        eprintln!(
            r#"{usage}
Names given to --suite, --fixture and --test are matched exactly. Tests
declared without a suite or fixture belong to DefaultSuite and DefaultFixture."#,
            usage = self.opts.usage(&message)
        );
    }

    fn parse(&self) -> Result<Option<Args>, Box<dyn std::error::Error>> {
        let args = &self.args[..];

        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        let list_tests = matches.opt_present("list");
        let suite = matches.opt_str("suite");
        let fixture = matches.opt_str("fixture");
        let test = matches.opt_str("test");
        let color = matches.opt_get("color")?.unwrap_or(ColorConfig::Auto);

        Ok(Some(Args {
            list_tests,
            suite,
            fixture,
            test,
            color,
        }))
    }
}
