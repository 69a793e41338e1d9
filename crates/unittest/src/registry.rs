use crate::{
    reporter::TestReporter,
    results::TestResults,
    runner::{Selection, TestRunner},
    suite::TestSuiteInfo,
    test::TestInfo,
};
use alloc::vec::Vec;
use linkme::distributed_slice;

#[doc(hidden)]
#[distributed_slice]
pub static TEST_CASES: [&'static TestInfo];

/// The tree of registered suites, fixtures and test cases.
#[derive(Debug, Default)]
pub struct TestRegistry {
    suites: Vec<TestSuiteInfo>,
}

impl TestRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { suites: Vec::new() }
    }

    /// Return the registry holding every test case declared with `#[test]`.
    ///
    /// The registry is built on first access. Test cases are inserted ordered
    /// by source file and line, i.e. in declaration order within a file.
    pub fn global() -> &'static Self {
        static GLOBAL: spin::Once<TestRegistry> = spin::Once::new();
        GLOBAL.call_once(|| {
            let mut tests: Vec<&'static TestInfo> = TEST_CASES.iter().copied().collect();
            tests.sort_by_key(|test| (test.details().file_name(), test.details().line_number()));

            let mut registry = TestRegistry::new();
            for test in tests {
                registry.add_test(test);
            }
            log::debug!(
                "registered {} test(s) in {} suite(s)",
                registry.count_tests(),
                registry.count_suites()
            );
            registry
        })
    }

    /// Return the suite with the given name, appending a new one if the
    /// registry does not contain it yet.
    pub fn get_test_suite(&mut self, suite_name: &'static str) -> &mut TestSuiteInfo {
        let index = match self
            .suites
            .iter()
            .position(|suite| suite.name() == suite_name)
        {
            Some(index) => index,
            None => {
                log::debug!("add suite {}", suite_name);
                self.suites.push(TestSuiteInfo::new(suite_name));
                self.suites.len() - 1
            }
        };
        &mut self.suites[index]
    }

    /// Register a test case under the suite and fixture named by its details.
    pub fn add_test(&mut self, test: &'static TestInfo) {
        let details = test.details();
        log::trace!("add test {}", details.qualified_name());
        self.get_test_suite(details.suite_name())
            .get_test_fixture(details.fixture_name())
            .add_test(test);
    }

    /// Return the suites in registration order.
    #[inline]
    pub fn suites(&self) -> &[TestSuiteInfo] {
        &self.suites[..]
    }

    #[allow(missing_docs)]
    pub fn count_suites(&self) -> usize {
        self.suites.len()
    }

    #[allow(missing_docs)]
    pub fn count_fixtures(&self) -> usize {
        self.suites.iter().map(TestSuiteInfo::count_fixtures).sum()
    }

    #[allow(missing_docs)]
    pub fn count_tests(&self) -> usize {
        self.suites.iter().map(TestSuiteInfo::count_tests).sum()
    }

    /// Run every registered test case and report to the given reporter.
    pub fn run_all_tests(&self, reporter: &mut dyn TestReporter) -> TestResults {
        TestRunner::new(reporter).run_tests_if(self, &Selection::all())
    }
}
