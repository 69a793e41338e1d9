use crate::{
    details::TestDetails,
    reporter::TestReporter,
    result::{Failure, TestResult},
};
use alloc::vec::Vec;
use core::time::Duration;

/// Aggregated outcome of one test run.
///
/// A fresh `TestResults` is created for every run. The runner drives it at
/// each suite, fixture and test boundary, and it forwards every event to the
/// reporter supplied along with the event.
#[derive(Debug, Default)]
pub struct TestResults {
    results: Vec<TestResult>,
    suite_count: usize,
    fixture_count: usize,
    test_count: usize,
    failed_test_count: usize,
    failure_count: usize,
    elapsed: Duration,
}

impl TestResults {
    /// Create an empty `TestResults`.
    pub fn new() -> Self {
        Self::default()
    }

    #[doc(hidden)]
    pub fn on_test_suite_start(
        &mut self,
        reporter: &mut dyn TestReporter,
        suite_name: &str,
        fixture_count: usize,
    ) {
        self.suite_count += 1;
        reporter.test_suite_starting(suite_name, fixture_count);
    }

    #[doc(hidden)]
    pub fn on_test_suite_finish(
        &mut self,
        reporter: &mut dyn TestReporter,
        suite_name: &str,
        fixture_count: usize,
        elapsed: Duration,
    ) {
        reporter.test_suite_ended(suite_name, fixture_count, elapsed);
    }

    #[doc(hidden)]
    pub fn on_test_fixture_start(
        &mut self,
        reporter: &mut dyn TestReporter,
        fixture_name: &str,
        test_count: usize,
    ) {
        self.fixture_count += 1;
        reporter.test_fixture_starting(fixture_name, test_count);
    }

    #[doc(hidden)]
    pub fn on_test_fixture_finish(
        &mut self,
        reporter: &mut dyn TestReporter,
        fixture_name: &str,
        test_count: usize,
        elapsed: Duration,
    ) {
        reporter.test_fixture_ended(fixture_name, test_count, elapsed);
    }

    /// Begin the result of a test case.
    pub fn on_test_start(&mut self, reporter: &mut dyn TestReporter, details: &TestDetails) {
        self.test_count += 1;
        self.results.push(TestResult::new(*details));
        reporter.test_case_starting(details);
    }

    /// Record a failure of the test case that is currently running.
    ///
    /// A failure whose details do not belong to the running test case is
    /// dropped with a warning.
    pub fn on_test_failure(
        &mut self,
        reporter: &mut dyn TestReporter,
        details: &TestDetails,
        failure: Failure,
    ) {
        match self.results.last_mut() {
            Some(current) if current.details() == details => {
                self.failure_count += 1;
                reporter.test_case_failed(details, &failure);
                current.add_failure(failure);
            }
            _ => log::warn!(
                "drop failure outside of the running test case: {}",
                details.qualified_name()
            ),
        }
    }

    /// Finish the result of the test case that is currently running.
    pub fn on_test_finish(
        &mut self,
        reporter: &mut dyn TestReporter,
        details: &TestDetails,
        elapsed: Duration,
    ) {
        let success = !self.current_test_failed();
        if !success {
            self.failed_test_count += 1;
        }
        reporter.test_case_ended(details, success, elapsed);
    }

    pub(crate) fn current_test_failed(&self) -> bool {
        self.results.last().map_or(false, TestResult::failed)
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Return the result of every executed test case, in execution order.
    #[inline]
    pub fn results(&self) -> &[TestResult] {
        &self.results[..]
    }

    /// Return the number of suites that have been started.
    #[inline]
    pub fn suite_count(&self) -> usize {
        self.suite_count
    }

    /// Return the number of fixtures that have been started.
    #[inline]
    pub fn fixture_count(&self) -> usize {
        self.fixture_count
    }

    /// Return the number of test cases that have been started.
    #[inline]
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Return the number of test cases that recorded at least one failure.
    #[inline]
    pub fn failed_test_count(&self) -> usize {
        self.failed_test_count
    }

    /// Return the total number of recorded failures.
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Return the wall time of the whole run, or zero without a timer.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Return whether the run finished without any failure.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failure_count == 0
    }
}
