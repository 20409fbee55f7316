//! Check evaluation - hard assertions and soft expectations
//!
//! Every check goes through [`Checker::check`]. Once an assertion has
//! failed, the run is latched and all later checks, in the same testcase
//! or any other, are skipped without evaluating their expression.

use crate::registry::CaseLabel;
use crate::reporter::Reporter;
use crate::state::RunState;
use std::fmt;

/// Kind of check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Hard check: failure latches the run
    Assertion,
    /// Soft check: failure is recorded, evaluation continues
    Expectation,
}

impl CheckKind {
    /// Label used in report lines
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Assertion => "Assertion",
            CheckKind::Expectation => "Expectation",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one evaluated check, handed straight to the reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome<'a> {
    /// Source text of the checked expression
    pub expr: &'a str,
    pub kind: CheckKind,
    pub file: &'a str,
    pub line: u32,
    pub passed: bool,
}

/// Check context handed to a running testcase.
///
/// Usually driven through [`umit_assert!`](crate::umit_assert) and
/// [`umit_expect!`](crate::umit_expect), which fill in the expression
/// text and source location.
pub struct Checker<'a> {
    state: &'a mut RunState,
    reporter: &'a mut Reporter,
    case: CaseLabel<'a>,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(
        state: &'a mut RunState,
        reporter: &'a mut Reporter,
        case: CaseLabel<'a>,
    ) -> Self {
        Self {
            state,
            reporter,
            case,
        }
    }

    /// Evaluate a check.
    ///
    /// `eval` is only called if the run is not latched. Returns the
    /// result of `eval`, or `false` when the check was skipped.
    pub fn check<F>(
        &mut self,
        kind: CheckKind,
        expr: &str,
        file: &str,
        line: u32,
        eval: F,
    ) -> bool
    where
        F: FnOnce() -> bool,
    {
        if self.state.is_aborted() {
            tracing::trace!(expr, file, line, "check skipped, run is latched");
            return false;
        }

        let passed = eval();

        if !passed && kind == CheckKind::Assertion {
            tracing::debug!(
                testcase = self.case.name,
                expr,
                file,
                line,
                "assertion failed, latching run"
            );
            self.state.latch();
        }
        self.state.record(passed);

        let outcome = CheckOutcome {
            expr,
            kind,
            file,
            line,
            passed,
        };
        self.reporter.report(&outcome, &mut self.case);

        passed
    }

    /// Hard check
    pub fn assert_that<F>(&mut self, expr: &str, file: &str, line: u32, eval: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        self.check(CheckKind::Assertion, expr, file, line, eval)
    }

    /// Soft check
    pub fn expect_that<F>(&mut self, expr: &str, file: &str, line: u32, eval: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        self.check(CheckKind::Expectation, expr, file, line, eval)
    }

    /// Name of the testcase this context belongs to
    pub fn case_name(&self) -> &str {
        self.case.name
    }

    /// Read-only view of the run counters
    pub fn state(&self) -> &RunState {
        &*self.state
    }
}
