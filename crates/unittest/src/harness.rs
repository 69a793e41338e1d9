mod args;
mod exit_status;

pub use self::exit_status::ExitStatus;

use self::args::{Args, ColorConfig};
use crate::{
    registry::TestRegistry,
    reporter::{ConsoleTestReporter, StdoutConsole},
    runner::{Selection, TestRunner},
    timer::StdTimer,
};
use std::io::IsTerminal as _;

#[doc(hidden)] // private API.
pub fn main() {
    let args = Args::from_env().unwrap_or_else(|st| st.exit());
    run(&args).exit();
}

fn run(args: &Args) -> ExitStatus {
    let registry = TestRegistry::global();
    let selection = args.selection();

    if args.list_tests {
        list_tests(registry, &selection);
        return ExitStatus::OK;
    }

    let color = match args.color {
        ColorConfig::Auto => std::io::stdout().is_terminal(),
        ColorConfig::Always => true,
        ColorConfig::Never => false,
    };
    let timer = StdTimer::new();
    let mut reporter = ConsoleTestReporter::new(StdoutConsole::new()).color(color);
    let results = TestRunner::new(&mut reporter)
        .timer(&timer)
        .run_tests_if(registry, &selection);

    ExitStatus::from_results(&results)
}

fn list_tests(registry: &TestRegistry, selection: &Selection<'_>) {
    let mut num_tests = 0;
    for suite in registry.suites() {
        for fixture in suite.fixtures() {
            for test in fixture.tests() {
                if selection.matches(test.details()) {
                    num_tests += 1;
                    println!("{}: test", test.details().qualified_name());
                }
            }
        }
    }

    fn plural_suffix(n: usize) -> &'static str {
        match n {
            1 => "",
            _ => "s",
        }
    }

    if num_tests != 0 {
        println!();
    }
    println!("{} test{}", num_tests, plural_suffix(num_tests));
}
