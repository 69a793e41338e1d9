use crate::fixture::TestFixtureInfo;
use alloc::vec::Vec;

/// A named group of fixtures.
#[derive(Debug)]
pub struct TestSuiteInfo {
    name: &'static str,
    fixtures: Vec<TestFixtureInfo>,
}

impl TestSuiteInfo {
    /// Create an empty suite.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            fixtures: Vec::new(),
        }
    }

    /// Return the name of this suite.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the fixture with the given name, appending a new one if this
    /// suite does not contain it yet.
    pub fn get_test_fixture(&mut self, fixture_name: &'static str) -> &mut TestFixtureInfo {
        let index = match self
            .fixtures
            .iter()
            .position(|fixture| fixture.name() == fixture_name)
        {
            Some(index) => index,
            None => {
                log::debug!("add fixture {} to suite {}", fixture_name, self.name);
                self.add_fixture(TestFixtureInfo::new(fixture_name));
                self.fixtures.len() - 1
            }
        };
        &mut self.fixtures[index]
    }

    /// Append a fixture at the end of this suite.
    pub fn add_fixture(&mut self, fixture: TestFixtureInfo) {
        self.fixtures.push(fixture);
    }

    /// Return the fixtures in registration order.
    #[inline]
    pub fn fixtures(&self) -> &[TestFixtureInfo] {
        &self.fixtures[..]
    }

    #[allow(missing_docs)]
    pub fn count_fixtures(&self) -> usize {
        self.fixtures.len()
    }

    #[allow(missing_docs)]
    pub fn count_tests(&self) -> usize {
        self.fixtures.iter().map(TestFixtureInfo::count_tests).sum()
    }
}
