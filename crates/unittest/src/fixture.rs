use crate::{context::TestContext, termination::Termination, test::TestInfo};
use alloc::vec::Vec;

/// State shared by the test cases of one fixture.
///
/// Every test case bound to a fixture type gets a fresh value created with
/// `Default`, prepared with `set_up` before the body runs and cleaned up with
/// `tear_down` after it returns.
pub trait Fixture: Default {
    /// Prepare the fixture before a test body runs.
    fn set_up(&mut self) {}

    /// Clean up the fixture after a test body has returned.
    fn tear_down(&mut self) {}
}

#[doc(hidden)] // private API.
pub fn run_with_fixture<F, T>(
    ctx: &mut TestContext<'_>,
    body: impl FnOnce(&mut F, &mut TestContext<'_>) -> T,
) -> anyhow::Result<()>
where
    F: Fixture,
    T: Termination,
{
    let mut fixture = F::default();
    fixture.set_up();
    let result = body(&mut fixture, ctx).into_result();
    fixture.tear_down();
    result
}

/// A named group of test cases.
#[derive(Debug)]
pub struct TestFixtureInfo {
    name: &'static str,
    tests: Vec<&'static TestInfo>,
}

impl TestFixtureInfo {
    /// Create an empty fixture.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tests: Vec::new(),
        }
    }

    /// Return the name of this fixture.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a test case at the end of this fixture.
    pub fn add_test(&mut self, test: &'static TestInfo) {
        self.tests.push(test);
    }

    /// Return the test cases in registration order.
    #[inline]
    pub fn tests(&self) -> &[&'static TestInfo] {
        &self.tests[..]
    }

    #[allow(missing_docs)]
    pub fn count_tests(&self) -> usize {
        self.tests.len()
    }
}
