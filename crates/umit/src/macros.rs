//! Check and registration macros

/// Hard check. If `cond` is false the run is latched: every later check is
/// skipped and no further testcase is started.
///
/// ```
/// use umit::{umit_assert, Checker};
///
/// fn testcase(t: &mut Checker<'_>) {
///     umit_assert!(t, 5 == 5);
/// }
/// ```
#[macro_export]
macro_rules! umit_assert {
    ($checker:expr, $cond:expr $(,)?) => {
        $checker.check(
            $crate::CheckKind::Assertion,
            stringify!($cond),
            file!(),
            line!(),
            || $cond,
        )
    };
}

/// Soft check. A false `cond` is recorded and reported, and evaluation
/// continues.
#[macro_export]
macro_rules! umit_expect {
    ($checker:expr, $cond:expr $(,)?) => {
        $checker.check(
            $crate::CheckKind::Expectation,
            stringify!($cond),
            file!(),
            line!(),
            || $cond,
        )
    };
}

/// Register a testcase function under its own name.
#[macro_export]
macro_rules! umit_register {
    ($registry:expr, $func:path $(,)?) => {
        $registry.register($func, stringify!($func))
    };
}
