macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Record a failure with the given message in the current test case.
///
/// The test body keeps running after the failure has been recorded.
#[macro_export]
macro_rules! fail {
    ($ctx:expr) => {
        $crate::fail!($ctx, "explicitly failed")
    };
    ($ctx:expr, $($arg:tt)+) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::generic_failure(__ut::format!($($arg)+)),
        )
    }};
}

/// Check that a boolean expression is `true`.
#[macro_export]
macro_rules! expect_true {
    ($ctx:expr, $value:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_true(__ut::stringify!($value), $value),
        )
    }};
}

/// Check that a boolean expression is `false`.
#[macro_export]
macro_rules! expect_false {
    ($ctx:expr, $value:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_false(__ut::stringify!($value), $value),
        )
    }};
}

/// Check that two values are equal.
///
/// The expected value comes first, as in `expect_eq!(ctx, 4, 2 + 2)`.
#[macro_export]
macro_rules! expect_eq {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_equal(
                __ut::stringify!($expected),
                __ut::stringify!($actual),
                &$expected,
                &$actual,
            ),
        )
    }};
}

/// Check that two values are not equal.
#[macro_export]
macro_rules! expect_ne {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_not_equal(
                __ut::stringify!($expected),
                __ut::stringify!($actual),
                &$expected,
                &$actual,
            ),
        )
    }};
}

/// Check that two strings are equal, ignoring ASCII case.
#[macro_export]
macro_rules! expect_eq_ignore_case {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_equal_ignore_case(
                __ut::stringify!($expected),
                __ut::stringify!($actual),
                &$expected,
                &$actual,
            ),
        )
    }};
}

/// Check that two strings differ, ignoring ASCII case.
#[macro_export]
macro_rules! expect_ne_ignore_case {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_not_equal_ignore_case(
                __ut::stringify!($expected),
                __ut::stringify!($actual),
                &$expected,
                &$actual,
            ),
        )
    }};
}

/// Check that `actual` lies within `tolerance` of `expected`.
#[macro_export]
macro_rules! expect_near {
    ($ctx:expr, $expected:expr, $actual:expr, $tolerance:expr $(,)?) => {{
        use $crate::_check_reexports as __ut;
        $ctx.check(
            __ut::line!(),
            __ut::check_close(
                __ut::stringify!($expected),
                __ut::stringify!($actual),
                __ut::stringify!($tolerance),
                $expected,
                $actual,
                $tolerance,
            ),
        )
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_details {
    ($name:expr, $fixture:expr, $suite:expr) => {{
        use $crate::_test_reexports as __ut;
        __ut::TestDetails::new($name, $fixture, $suite, __ut::file!(), __ut::line!())
    }};
}

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        #[$crate::_test_reexports::distributed_slice($crate::_test_reexports::TEST_CASES)]
        #[linkme(crate = $crate::_test_reexports::linkme)]
        $item
    };
}

/// Generate the main function for running the registered test cases on the host.
#[cfg(feature = "harness")]
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_test_harness_reexports::main()
        }
    };
}
