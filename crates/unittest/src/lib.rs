/*!
A self-hosted unit testing framework for bare-metal targets.

Test cases are registered at link time with the [`test`] attribute, grouped
into suites and fixtures, and executed sequentially by a [`TestRunner`].
Outcomes flow to a [`TestReporter`], which renders them on any
[`core::fmt::Write`] sink (typically a UART) or records them for later
inspection.

```ignore
#[derive(Default)]
struct Basic;

impl unittest::Fixture for Basic {}

#[unittest::test(suite = "MathSuite", fixture = Basic)]
fn add(_: &mut Basic, ctx: &mut unittest::TestContext<'_>) {
    unittest::expect_eq!(ctx, 4, 2 + 2);
}
```
!*/

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/unittest/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

extern crate alloc;

#[macro_use]
mod macros;
pub mod checks;
mod context;
mod details;
mod fixture;
#[cfg(feature = "harness")]
mod harness;
mod registry;
pub mod reporter;
mod result;
mod results;
mod runner;
mod suite;
mod termination;
mod timer;

pub use crate::{
    context::TestContext,
    details::{QualifiedName, TestDetails},
    fixture::{Fixture, TestFixtureInfo},
    registry::TestRegistry,
    reporter::{ConsoleTestReporter, DeferredTestReporter, LogReporter, TestReporter},
    result::{Failure, FailureList, TestResult},
    results::TestResults,
    runner::{run_all_tests, run_selected_tests, Selection, TestRunner},
    suite::TestSuiteInfo,
    termination::Termination,
    test::{TestFn, TestInfo},
    timer::Timer,
};

#[cfg(feature = "std")]
pub use crate::{reporter::StdoutConsole, timer::StdTimer};

#[cfg(feature = "harness")]
pub use crate::harness::ExitStatus;

/// Register a function as a test case.
pub use unittest_macros::test;

hidden_item! {
    /// Re-exported items for #[test]
    pub mod _test_reexports {
        pub use crate::{
            __test_details as test_details,
            fixture::run_with_fixture,
            registry::TEST_CASES,
            termination::Termination,
            context::TestContext,
            details::{QualifiedName, TestDetails},
            test::{TestFn, TestInfo},
        };
        pub use anyhow;
        pub use core::{file, line, result::Result};
        pub use linkme::{self, distributed_slice};
    }

    /// Re-exported items for the check macros.
    pub mod _check_reexports {
        pub use crate::checks::{
            check_close, check_equal, check_equal_ignore_case, check_false, check_not_equal,
            check_not_equal_ignore_case, check_true, generic_failure,
        };
        pub use alloc::format;
        pub use core::{line, stringify};
    }

    /// Re-exported items for test_harness!()
    #[cfg(feature = "harness")]
    pub mod _test_harness_reexports {
        pub use crate::harness::main;
    }
}
