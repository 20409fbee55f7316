//! Per-run counters and the hard-failure latch

/// Mutable state of one run.
///
/// `checks_failed <= checks_run` at all times, and `aborted` never goes
/// back to `false` once set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunState {
    aborted: bool,
    checks_run: usize,
    checks_failed: usize,
}

impl RunState {
    /// Fresh state: no checks, latch open
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a failed assertion has latched the run
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Number of checks evaluated
    pub fn checks_run(&self) -> usize {
        self.checks_run
    }

    /// Number of evaluated checks that were false
    pub fn checks_failed(&self) -> usize {
        self.checks_failed
    }

    /// Number of evaluated checks that were true
    pub fn checks_passed(&self) -> usize {
        self.checks_run - self.checks_failed
    }

    pub(crate) fn record(&mut self, passed: bool) {
        if !passed {
            self.checks_failed += 1;
        }
        self.checks_run += 1;
    }

    pub(crate) fn latch(&mut self) {
        self.aborted = true;
    }
}
