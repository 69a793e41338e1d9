use crate::details::TestDetails;
use alloc::{string::String, vec::Vec};
use core::slice;

/// A single recorded check failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    line_number: u32,
    message: String,
}

impl Failure {
    /// Create a new `Failure` recorded at the given source line.
    pub fn new(line_number: u32, message: impl Into<String>) -> Self {
        Self {
            line_number,
            message: message.into(),
        }
    }

    /// Return the source line at which the failure was recorded.
    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Return the failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failures of one test execution, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureList {
    failures: Vec<Failure>,
}

impl FailureList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Append a failure at the tail.
    pub fn add(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Return the first recorded failure.
    pub fn head(&self) -> Option<&Failure> {
        self.failures.first()
    }

    /// Return the last recorded failure.
    pub fn tail(&self) -> Option<&Failure> {
        self.failures.last()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterate over the failures in recording order.
    pub fn iter(&self) -> slice::Iter<'_, Failure> {
        self.failures.iter()
    }
}

impl<'a> IntoIterator for &'a FailureList {
    type Item = &'a Failure;
    type IntoIter = slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The outcome of executing one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    details: TestDetails,
    failures: FailureList,
}

impl TestResult {
    /// Create a passing result for the given test case.
    pub fn new(details: TestDetails) -> Self {
        Self {
            details,
            failures: FailureList::new(),
        }
    }

    /// Record a failure for this test case.
    pub fn add_failure(&mut self, failure: Failure) {
        self.failures.add(failure);
    }

    /// Return the details of the test case this result belongs to.
    #[inline]
    pub fn details(&self) -> &TestDetails {
        &self.details
    }

    /// Return the recorded failures.
    #[inline]
    pub fn failures(&self) -> &FailureList {
        &self.failures
    }

    /// Return whether any failure has been recorded.
    #[inline]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}
