use crate::{
    checks::AssertionResult,
    details::TestDetails,
    reporter::TestReporter,
    result::Failure,
    results::TestResults,
};
use alloc::string::String;

/// Context values while running a test case.
///
/// The runner creates a new context right before a test body starts and
/// drops it as soon as the body returns, so every failure recorded through
/// it belongs to the test case that is currently running. Helper functions
/// that perform checks take `&mut TestContext<'_>` as a parameter.
pub struct TestContext<'a> {
    details: &'a TestDetails,
    results: &'a mut TestResults,
    reporter: &'a mut dyn TestReporter,
}

impl<'a> TestContext<'a> {
    pub(crate) fn new(
        details: &'a TestDetails,
        results: &'a mut TestResults,
        reporter: &'a mut dyn TestReporter,
    ) -> Self {
        Self {
            details,
            results,
            reporter,
        }
    }

    /// Return the details of the running test case.
    #[inline]
    pub fn details(&self) -> &TestDetails {
        self.details
    }

    /// Return whether the running test case has recorded a failure so far.
    pub fn has_failed(&self) -> bool {
        self.results.current_test_failed()
    }

    /// Record a failure at the given source line.
    pub fn add_failure(&mut self, line_number: u32, message: impl Into<String>) {
        self.results.on_test_failure(
            &mut *self.reporter,
            self.details,
            Failure::new(line_number, message),
        );
    }

    #[doc(hidden)] // private API.
    #[inline(never)]
    pub fn check(&mut self, line_number: u32, result: AssertionResult) -> bool {
        match result {
            Ok(()) => true,
            Err(message) => {
                self.add_failure(line_number, message);
                false
            }
        }
    }
}
