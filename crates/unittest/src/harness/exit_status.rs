use crate::results::TestResults;

/// Exit status code used as a result of the test process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExitStatus(i32);

impl ExitStatus {
    /// Every selected test case has passed.
    pub const OK: Self = Self(0);

    /// At least one failure has been recorded, or the harness could not start.
    pub const FAILED: Self = Self(101);

    /// Return the exit status corresponding to the results of a run.
    pub fn from_results(results: &TestResults) -> Self {
        if results.is_success() {
            Self::OK
        } else {
            Self::FAILED
        }
    }

    /// Return the raw exit code.
    #[inline]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Terminate the test process with the exit code.
    ///
    /// This method **should not** be called before the cleanup
    /// of the test process has completed.
    #[inline]
    pub fn exit(self) -> ! {
        std::process::exit(self.code());
    }
}
