use core::fmt;

/// Identity of a single test case.
///
/// Empty fixture or suite names stand for the default groups, so that a test
/// declared outside of any explicit fixture or suite still has a place in the
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDetails {
    test_name: &'static str,
    fixture_name: &'static str,
    suite_name: &'static str,
    file_name: &'static str,
    line_number: u32,
}

impl TestDetails {
    /// The fixture name used when a test does not belong to an explicit fixture.
    pub const DEFAULT_FIXTURE_NAME: &'static str = "DefaultFixture";

    /// The suite name used when a test does not belong to an explicit suite.
    pub const DEFAULT_SUITE_NAME: &'static str = "DefaultSuite";

    /// Create a new `TestDetails`.
    pub const fn new(
        test_name: &'static str,
        fixture_name: &'static str,
        suite_name: &'static str,
        file_name: &'static str,
        line_number: u32,
    ) -> Self {
        Self {
            test_name,
            fixture_name,
            suite_name,
            file_name,
            line_number,
        }
    }

    /// Return the name of the test case.
    #[inline]
    pub fn test_name(&self) -> &'static str {
        self.test_name
    }

    /// Return the name of the fixture, or the default fixture name.
    pub fn fixture_name(&self) -> &'static str {
        if self.fixture_name.is_empty() {
            Self::DEFAULT_FIXTURE_NAME
        } else {
            self.fixture_name
        }
    }

    /// Return the name of the suite, or the default suite name.
    pub fn suite_name(&self) -> &'static str {
        if self.suite_name.is_empty() {
            Self::DEFAULT_SUITE_NAME
        } else {
            self.suite_name
        }
    }

    /// Return the source file in which the test case was declared.
    #[inline]
    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Return the line at which the test case was declared.
    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Return a value that displays as `Suite::Fixture::Test`.
    pub fn qualified_name(&self) -> QualifiedName<'_> {
        QualifiedName(self)
    }
}

/// The display form of [`TestDetails::qualified_name`].
#[derive(Debug)]
pub struct QualifiedName<'a>(&'a TestDetails);

impl fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.0.suite_name(),
            self.0.fixture_name(),
            self.0.test_name()
        )
    }
}
