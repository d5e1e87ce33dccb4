//! Assertion macros.
//!
//! Every macro takes the running test's [`TestContext`] first. When the
//! checked condition holds, execution continues with the next statement.
//! When it does not, the macro renders `<file>:<line>: <message>`, prints it,
//! stores it in the test's record and returns `Err` from the enclosing
//! function, so later assertions of the same test never run.
//!
//! Messages are built from `format_args!` inside the failure branch only:
//! a passing assertion neither formats nor allocates.
//!
//! | Macro | Passes when | Message |
//! |---|---|---|
//! | [`mut_assert!`] | condition | caller's format string |
//! | [`mut_fail!`] | never | caller's format string |
//! | [`mut_assert_true!`] / [`mut_assert_false!`] | expr / `!expr` | `Expected true: <expr>` |
//! | [`mut_assert_eq!`] | `actual == expect` | `Expected <a> == <e> but <a> = <value>` |
//! | [`mut_assert_neq!`] | `actual != expect` | `Expected <a> != <e>` |
//! | [`mut_assert_str_eq!`] | same bytes | `Expected string equality: <a> == <e>` |
//! | [`mut_assert_null!`] / [`mut_assert_not_null!`] | [`Nullable`] check | `Expected NULL: <v>` |
//! | [`mut_assert_float_eq!`] | `abs(a - e) < epsilon` | `Expected <a> ≈ <e> ± <eps> but <a> = <value>` |
//!
//! [`TestContext`]: crate::harness::TestContext

use std::ptr::NonNull;

/// Values that can be absent: raw pointers and `Option`.
pub trait Nullable {
    fn is_null_value(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null_value(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    fn is_null_value(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    fn is_null_value(&self) -> bool {
        (**self).is_null_value()
    }
}

/// Fails the test with the given message unless `cond` holds.
///
/// `mut_assert!(ctx, cond, "fmt", args..)`; with no message the condition's
/// source text is shown.
#[macro_export]
macro_rules! mut_assert {
    ($ctx:expr, $cond:expr $(,)?) => {
        $crate::mut_assert!($ctx, $cond, "Assertion failed: {}", stringify!($cond))
    };
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return ::core::result::Result::Err($ctx.fail(
                $crate::format::Location::new(file!(), line!()),
                format_args!($($arg)+),
            ));
        }
    };
}

/// Fails the test unconditionally.
#[macro_export]
macro_rules! mut_fail {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::mut_assert!($ctx, false, $($arg)+)
    };
}

/// Ends the test as passed.
#[macro_export]
macro_rules! mut_pass {
    () => {
        return ::core::result::Result::Ok(())
    };
}

#[macro_export]
macro_rules! mut_assert_true {
    ($ctx:expr, $expr:expr $(,)?) => {
        $crate::mut_assert!($ctx, $expr, "Expected true: {}", stringify!($expr))
    };
}

#[macro_export]
macro_rules! mut_assert_false {
    ($ctx:expr, $expr:expr $(,)?) => {
        $crate::mut_assert!($ctx, !($expr), "Expected false: {}", stringify!($expr))
    };
}

/// Equality check showing the actual value (`Debug`) on failure.
#[macro_export]
macro_rules! mut_assert_eq {
    ($ctx:expr, $actual:expr, $expect:expr $(,)?) => {
        match (&$actual, &$expect) {
            (actual, expect) => {
                $crate::mut_assert!(
                    $ctx,
                    *actual == *expect,
                    "Expected {} == {} but {} = {:?}",
                    stringify!($actual),
                    stringify!($expect),
                    stringify!($actual),
                    actual
                )
            }
        }
    };
}

#[macro_export]
macro_rules! mut_assert_neq {
    ($ctx:expr, $actual:expr, $expect:expr $(,)?) => {
        match (&$actual, &$expect) {
            (actual, expect) => {
                $crate::mut_assert!(
                    $ctx,
                    *actual != *expect,
                    "Expected {} != {}",
                    stringify!($actual),
                    stringify!($expect)
                )
            }
        }
    };
}

/// Byte-wise string comparison of anything that is `AsRef<str>`.
#[macro_export]
macro_rules! mut_assert_str_eq {
    ($ctx:expr, $actual:expr, $expect:expr $(,)?) => {
        match (&$actual, &$expect) {
            (actual, expect) => {
                let actual: &str = ::core::convert::AsRef::<str>::as_ref(actual);
                let expect: &str = ::core::convert::AsRef::<str>::as_ref(expect);
                $crate::mut_assert!(
                    $ctx,
                    actual.as_bytes() == expect.as_bytes(),
                    "Expected string equality: {} == {}",
                    stringify!($actual),
                    stringify!($expect)
                )
            }
        }
    };
}

#[macro_export]
macro_rules! mut_assert_null {
    ($ctx:expr, $value:expr $(,)?) => {
        $crate::mut_assert!(
            $ctx,
            $crate::assertions::Nullable::is_null_value(&$value),
            "Expected NULL: {}",
            stringify!($value)
        )
    };
}

#[macro_export]
macro_rules! mut_assert_not_null {
    ($ctx:expr, $value:expr $(,)?) => {
        $crate::mut_assert!(
            $ctx,
            !$crate::assertions::Nullable::is_null_value(&$value),
            "Expected non-NULL: {}",
            stringify!($value)
        )
    };
}

/// Approximate float equality: passes when `abs(actual - expect) < epsilon`.
///
/// Operands convert to `f64` with `From`, so `f32` and small integers work too.
#[macro_export]
macro_rules! mut_assert_float_eq {
    ($ctx:expr, $actual:expr, $expect:expr, $epsilon:expr $(,)?) => {
        match (
            <f64 as ::core::convert::From<_>>::from($actual),
            <f64 as ::core::convert::From<_>>::from($expect),
            <f64 as ::core::convert::From<_>>::from($epsilon),
        ) {
            (actual, expect, epsilon) => {
                $crate::mut_assert!(
                    $ctx,
                    (actual - expect).abs() < epsilon,
                    "Expected {} \u{2248} {} \u{b1} {} but {} = {:.6}",
                    stringify!($actual),
                    stringify!($expect),
                    stringify!($epsilon),
                    stringify!($actual),
                    actual
                )
            }
        }
    };
}
