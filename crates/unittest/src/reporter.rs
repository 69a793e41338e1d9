//! Sinks receiving the lifecycle events of a test run.

mod console;
mod deferred;
mod log;

pub use self::{console::ConsoleTestReporter, deferred::DeferredTestReporter, log::LogReporter};

#[cfg(feature = "std")]
pub use self::console::StdoutConsole;

use crate::{details::TestDetails, result::Failure, results::TestResults};
use alloc::boxed::Box;
use core::time::Duration;

/// Receiver of the events emitted during a test run.
///
/// Events arrive in the following order:
/// run start, then for each suite (suite start, then for each fixture
/// (fixture start, then for each test case (test start, its failures,
/// test end), fixture end), suite end), then summary, overview and run end.
pub trait TestReporter {
    #[allow(missing_docs)]
    fn test_run_starting(&mut self, suites: usize, fixtures: usize, tests: usize);

    #[allow(missing_docs)]
    fn test_run_ended(&mut self, suites: usize, fixtures: usize, tests: usize, elapsed: Duration);

    /// Report the aggregated counts of a finished run.
    fn test_run_summary(&mut self, results: &TestResults);

    /// Report every failure recorded during a finished run.
    fn test_run_overview(&mut self, results: &TestResults);

    #[allow(missing_docs)]
    fn test_suite_starting(&mut self, name: &str, fixtures: usize);

    #[allow(missing_docs)]
    fn test_suite_ended(&mut self, name: &str, fixtures: usize, elapsed: Duration);

    #[allow(missing_docs)]
    fn test_fixture_starting(&mut self, name: &str, tests: usize);

    #[allow(missing_docs)]
    fn test_fixture_ended(&mut self, name: &str, tests: usize, elapsed: Duration);

    #[allow(missing_docs)]
    fn test_case_starting(&mut self, details: &TestDetails);

    #[allow(missing_docs)]
    fn test_case_ended(&mut self, details: &TestDetails, success: bool, elapsed: Duration);

    /// Report a failure recorded by the running test case.
    fn test_case_failed(&mut self, details: &TestDetails, failure: &Failure);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&mut self, suites: usize, fixtures: usize, tests: usize) {
            (**self).test_run_starting(suites, fixtures, tests)
        }

        fn test_run_ended(
            &mut self,
            suites: usize,
            fixtures: usize,
            tests: usize,
            elapsed: Duration,
        ) {
            (**self).test_run_ended(suites, fixtures, tests, elapsed)
        }

        fn test_run_summary(&mut self, results: &TestResults) {
            (**self).test_run_summary(results)
        }

        fn test_run_overview(&mut self, results: &TestResults) {
            (**self).test_run_overview(results)
        }

        fn test_suite_starting(&mut self, name: &str, fixtures: usize) {
            (**self).test_suite_starting(name, fixtures)
        }

        fn test_suite_ended(&mut self, name: &str, fixtures: usize, elapsed: Duration) {
            (**self).test_suite_ended(name, fixtures, elapsed)
        }

        fn test_fixture_starting(&mut self, name: &str, tests: usize) {
            (**self).test_fixture_starting(name, tests)
        }

        fn test_fixture_ended(&mut self, name: &str, tests: usize, elapsed: Duration) {
            (**self).test_fixture_ended(name, tests, elapsed)
        }

        fn test_case_starting(&mut self, details: &TestDetails) {
            (**self).test_case_starting(details)
        }

        fn test_case_ended(&mut self, details: &TestDetails, success: bool, elapsed: Duration) {
            (**self).test_case_ended(details, success, elapsed)
        }

        fn test_case_failed(&mut self, details: &TestDetails, failure: &Failure) {
            (**self).test_case_failed(details, failure)
        }
    };
}

impl<R: ?Sized> TestReporter for &mut R
where
    R: TestReporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> TestReporter for Box<R>
where
    R: TestReporter,
{
    impl_reporter_body!();
}
