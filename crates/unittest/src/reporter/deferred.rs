use super::TestReporter;
use crate::{
    details::TestDetails,
    result::{Failure, TestResult},
    results::TestResults,
};
use alloc::vec::Vec;
use core::time::Duration;

/// A reporter keeping the result of every test case for later inspection.
///
/// Nothing is printed. A result is appended when a test case starts and the
/// failures it records are added to the latest result.
#[derive(Debug, Default)]
pub struct DeferredTestReporter {
    results: Vec<TestResult>,
}

impl DeferredTestReporter {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the collected results in execution order.
    #[inline]
    pub fn results(&self) -> &[TestResult] {
        &self.results[..]
    }

    /// Consume the reporter and return the collected results.
    pub fn into_results(self) -> Vec<TestResult> {
        self.results
    }
}

impl TestReporter for DeferredTestReporter {
    fn test_run_starting(&mut self, _: usize, _: usize, _: usize) {}

    fn test_run_ended(&mut self, _: usize, _: usize, _: usize, _: Duration) {}

    fn test_run_summary(&mut self, _: &TestResults) {}

    fn test_run_overview(&mut self, _: &TestResults) {}

    fn test_suite_starting(&mut self, _: &str, _: usize) {}

    fn test_suite_ended(&mut self, _: &str, _: usize, _: Duration) {}

    fn test_fixture_starting(&mut self, _: &str, _: usize) {}

    fn test_fixture_ended(&mut self, _: &str, _: usize, _: Duration) {}

    fn test_case_starting(&mut self, details: &TestDetails) {
        self.results.push(TestResult::new(*details));
    }

    fn test_case_ended(&mut self, _: &TestDetails, _: bool, _: Duration) {}

    fn test_case_failed(&mut self, details: &TestDetails, failure: &Failure) {
        match self.results.last_mut() {
            Some(result) if result.details() == details => result.add_failure(failure.clone()),
            _ => log::warn!(
                "dropped failure of {} reported outside of its test case",
                details.qualified_name()
            ),
        }
    }
}
