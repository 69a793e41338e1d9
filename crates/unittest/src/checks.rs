//! Comparison helpers behind the `expect_*` macros.
//!
//! Each check returns `Ok(())` on success, or the failure message describing
//! the mismatch. Values are rendered with their `Debug` representation, and
//! a value line is only printed when it differs from the source expression.

use alloc::{format, string::String};
use core::{
    fmt::{self, Write as _},
    ops::Sub,
};

/// The result of a single check.
pub type AssertionResult = Result<(), String>;

/// A failure carrying an arbitrary message.
pub fn generic_failure(message: impl Into<String>) -> AssertionResult {
    Err(message.into())
}

/// Check that `value` is `true`.
pub fn check_true(value_expr: &str, value: bool) -> AssertionResult {
    if value {
        Ok(())
    } else {
        Err(boolean_failure(value_expr, true, value))
    }
}

/// Check that `value` is `false`.
pub fn check_false(value_expr: &str, value: bool) -> AssertionResult {
    if value {
        Err(boolean_failure(value_expr, false, value))
    } else {
        Ok(())
    }
}

/// Check that `expected == actual`.
pub fn check_equal<E, A>(
    expected_expr: &str,
    actual_expr: &str,
    expected: &E,
    actual: &A,
) -> AssertionResult
where
    E: ?Sized + PartialEq<A> + fmt::Debug,
    A: ?Sized + fmt::Debug,
{
    if *expected == *actual {
        Ok(())
    } else {
        Err(eq_failure(
            "Expected",
            expected_expr,
            actual_expr,
            &format!("{:?}", expected),
            &format!("{:?}", actual),
        ))
    }
}

/// Check that `expected != actual`.
pub fn check_not_equal<E, A>(
    expected_expr: &str,
    actual_expr: &str,
    expected: &E,
    actual: &A,
) -> AssertionResult
where
    E: ?Sized + PartialEq<A> + fmt::Debug,
    A: ?Sized + fmt::Debug,
{
    if *expected == *actual {
        Err(eq_failure(
            "Expected not equal to",
            expected_expr,
            actual_expr,
            &format!("{:?}", expected),
            &format!("{:?}", actual),
        ))
    } else {
        Ok(())
    }
}

/// Check that two strings are equal, ignoring ASCII case.
pub fn check_equal_ignore_case<E, A>(
    expected_expr: &str,
    actual_expr: &str,
    expected: &E,
    actual: &A,
) -> AssertionResult
where
    E: ?Sized + AsRef<str>,
    A: ?Sized + AsRef<str>,
{
    let (expected, actual) = (expected.as_ref(), actual.as_ref());
    if expected.eq_ignore_ascii_case(actual) {
        Ok(())
    } else {
        Err(eq_failure(
            "Expected",
            expected_expr,
            actual_expr,
            &format!("{:?}", expected),
            &format!("{:?}", actual),
        ))
    }
}

/// Check that two strings differ, ignoring ASCII case.
pub fn check_not_equal_ignore_case<E, A>(
    expected_expr: &str,
    actual_expr: &str,
    expected: &E,
    actual: &A,
) -> AssertionResult
where
    E: ?Sized + AsRef<str>,
    A: ?Sized + AsRef<str>,
{
    let (expected, actual) = (expected.as_ref(), actual.as_ref());
    if expected.eq_ignore_ascii_case(actual) {
        Err(eq_failure(
            "Expected not equal to",
            expected_expr,
            actual_expr,
            &format!("{:?}", expected),
            &format!("{:?}", actual),
        ))
    } else {
        Ok(())
    }
}

/// Check that `actual` lies in `[expected - tolerance, expected + tolerance]`.
///
/// The distance is measured without leaving the range of `T`, so integer
/// windows reaching past `0` or `MAX` are fine.
pub fn check_close<T>(
    expected_expr: &str,
    actual_expr: &str,
    tolerance_expr: &str,
    expected: T,
    actual: T,
    tolerance: T,
) -> AssertionResult
where
    T: Copy + PartialOrd + Sub<Output = T> + fmt::Debug,
{
    let distance = if actual > expected {
        actual - expected
    } else {
        expected - actual
    };
    if distance <= tolerance {
        return Ok(());
    }

    let mut message = eq_failure(
        "Expected",
        expected_expr,
        actual_expr,
        &format!("{:?}", expected),
        &format!("{:?}", actual),
    );
    let tolerance = format!("{:?}", tolerance);
    let _ = write!(message, "\n  Tolerance: {}", tolerance_expr);
    if tolerance != tolerance_expr {
        let _ = write!(message, "\n  (+/-) {}", tolerance);
    }
    Err(message)
}

fn boolean_failure(value_expr: &str, expected: bool, actual: bool) -> String {
    let mut message = format!("Value of: {}", value_expr);
    let actual = format!("{}", actual);
    if actual != value_expr {
        let _ = write!(message, "\n  Actual: {}", actual);
    }
    let _ = write!(message, "\n  Expected: {}", expected);
    message
}

fn eq_failure(
    label: &str,
    expected_expr: &str,
    actual_expr: &str,
    expected: &str,
    actual: &str,
) -> String {
    let mut message = format!("Value of: {}", actual_expr);
    if actual != actual_expr {
        let _ = write!(message, "\n  Actual: {}", actual);
    }
    let _ = write!(message, "\n  {}: {}", label, expected_expr);
    if expected != expected_expr {
        let _ = write!(message, "\n  Which is: {}", expected);
    }
    message
}
