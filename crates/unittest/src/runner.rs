use crate::{
    context::TestContext,
    details::TestDetails,
    fixture::TestFixtureInfo,
    registry::TestRegistry,
    reporter::TestReporter,
    results::TestResults,
    suite::TestSuiteInfo,
    test::TestInfo,
    timer::Timer,
};
use core::time::Duration;

/// Exact names restricting which test cases take part in a run.
///
/// An unset name matches everything. A suite or fixture only takes part in a
/// run when it contains at least one selected test case.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Selection<'a> {
    suite: Option<&'a str>,
    fixture: Option<&'a str>,
    test: Option<&'a str>,
}

impl<'a> Selection<'a> {
    /// Select every registered test case.
    pub const fn all() -> Self {
        Self {
            suite: None,
            fixture: None,
            test: None,
        }
    }

    /// Only select test cases in the suite with the given name.
    pub fn suite(mut self, name: &'a str) -> Self {
        self.suite = Some(name);
        self
    }

    /// Only select test cases in fixtures with the given name.
    pub fn fixture(mut self, name: &'a str) -> Self {
        self.fixture = Some(name);
        self
    }

    /// Only select test cases with the given name.
    pub fn test(mut self, name: &'a str) -> Self {
        self.test = Some(name);
        self
    }

    /// Return whether the test case with the given details is selected.
    pub fn matches(&self, details: &TestDetails) -> bool {
        fn matches_name(pattern: Option<&str>, name: &str) -> bool {
            pattern.map_or(true, |pattern| pattern == name)
        }
        matches_name(self.suite, details.suite_name())
            && matches_name(self.fixture, details.fixture_name())
            && matches_name(self.test, details.test_name())
    }

    fn selects_fixture(&self, fixture: &TestFixtureInfo) -> bool {
        fixture
            .tests()
            .iter()
            .any(|test| self.matches(test.details()))
    }

    fn selects_suite(&self, suite: &TestSuiteInfo) -> bool {
        suite
            .fixtures()
            .iter()
            .any(|fixture| self.selects_fixture(fixture))
    }
}

/// Executes registered test cases and reports their outcome.
pub struct TestRunner<'a> {
    reporter: &'a mut dyn TestReporter,
    timer: Option<&'a dyn Timer>,
}

impl<'a> TestRunner<'a> {
    /// Create a runner reporting to the given reporter.
    pub fn new(reporter: &'a mut dyn TestReporter) -> Self {
        Self {
            reporter,
            timer: None,
        }
    }

    /// Measure elapsed times with the given timer.
    ///
    /// Without a timer every reported duration is zero.
    pub fn timer(mut self, timer: &'a dyn Timer) -> Self {
        self.timer = Some(timer);
        self
    }

    fn now(&self) -> Duration {
        self.timer.map_or(Duration::ZERO, |timer| timer.now())
    }

    fn elapsed_since(&self, start: Duration) -> Duration {
        self.now().checked_sub(start).unwrap_or_default()
    }

    /// Run the selected test cases of `registry`.
    ///
    /// Suites, fixtures and test cases are visited in registration order.
    /// A failing test case never stops the run.
    pub fn run_tests_if(
        &mut self,
        registry: &TestRegistry,
        selection: &Selection<'_>,
    ) -> TestResults {
        let mut results = TestResults::new();
        let start = self.now();

        let mut suite_count = 0;
        let mut fixture_count = 0;
        let mut test_count = 0;
        for suite in registry.suites() {
            if !selection.selects_suite(suite) {
                continue;
            }
            suite_count += 1;
            for fixture in suite.fixtures() {
                if !selection.selects_fixture(fixture) {
                    continue;
                }
                fixture_count += 1;
                test_count += fixture
                    .tests()
                    .iter()
                    .filter(|test| selection.matches(test.details()))
                    .count();
            }
        }
        log::debug!(
            "running {} test(s) from {} fixture(s) in {} suite(s)",
            test_count,
            fixture_count,
            suite_count
        );
        self.reporter
            .test_run_starting(suite_count, fixture_count, test_count);

        for suite in registry.suites() {
            if selection.selects_suite(suite) {
                self.run_suite(&mut results, suite, selection);
            }
        }

        results.set_elapsed(self.elapsed_since(start));
        self.reporter.test_run_summary(&results);
        self.reporter.test_run_overview(&results);
        self.reporter.test_run_ended(
            results.suite_count(),
            results.fixture_count(),
            results.test_count(),
            results.elapsed(),
        );

        results
    }

    /// Run every test case of `registry`.
    pub fn run_all_tests(&mut self, registry: &TestRegistry) -> TestResults {
        self.run_tests_if(registry, &Selection::all())
    }

    fn run_suite(
        &mut self,
        results: &mut TestResults,
        suite: &TestSuiteInfo,
        selection: &Selection<'_>,
    ) {
        let fixture_count = suite
            .fixtures()
            .iter()
            .filter(|fixture| selection.selects_fixture(fixture))
            .count();
        let start = self.now();
        results.on_test_suite_start(&mut *self.reporter, suite.name(), fixture_count);

        for fixture in suite.fixtures() {
            if selection.selects_fixture(fixture) {
                self.run_fixture(results, fixture, selection);
            }
        }

        let elapsed = self.elapsed_since(start);
        results.on_test_suite_finish(&mut *self.reporter, suite.name(), fixture_count, elapsed);
    }

    fn run_fixture(
        &mut self,
        results: &mut TestResults,
        fixture: &TestFixtureInfo,
        selection: &Selection<'_>,
    ) {
        let test_count = fixture
            .tests()
            .iter()
            .filter(|test| selection.matches(test.details()))
            .count();
        let start = self.now();
        results.on_test_fixture_start(&mut *self.reporter, fixture.name(), test_count);

        for &test in fixture.tests() {
            if selection.matches(test.details()) {
                self.run_test(results, test);
            }
        }

        let elapsed = self.elapsed_since(start);
        results.on_test_fixture_finish(&mut *self.reporter, fixture.name(), test_count, elapsed);
    }

    fn run_test(&mut self, results: &mut TestResults, test: &'static TestInfo) {
        let details = test.details();
        results.on_test_start(&mut *self.reporter, details);

        let start = self.now();
        test.run(&mut TestContext::new(
            details,
            &mut *results,
            &mut *self.reporter,
        ));
        let elapsed = self.elapsed_since(start);

        results.on_test_finish(&mut *self.reporter, details, elapsed);
    }
}

/// Run every test case declared with `#[test]`.
pub fn run_all_tests(reporter: &mut dyn TestReporter) -> TestResults {
    TestRegistry::global().run_all_tests(reporter)
}

/// Run the selected test cases declared with `#[test]`.
pub fn run_selected_tests(
    reporter: &mut dyn TestReporter,
    selection: &Selection<'_>,
) -> TestResults {
    TestRunner::new(reporter).run_tests_if(TestRegistry::global(), selection)
}
