//! Test runner - execute registered testcases in order

use crate::check::Checker;
use crate::registry::Registry;
use crate::reporter::Reporter;
use crate::state::RunState;
use std::io::Write;
use umit_config::Config;

/// Largest exit status used for a failure count; higher statuses are
/// reserved for the harness
pub const MAX_FAILURE_STATUS: u8 = 253;

/// Why the runner stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopReason {
    /// Every registered testcase was invoked
    #[default]
    Exhausted,
    /// The latch was set before the next testcase could start
    Latched,
}

/// Final result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Checks evaluated
    pub checks_run: usize,
    /// Checks evaluated as false
    pub checks_failed: usize,
    /// Whether a failed assertion latched the run
    pub aborted: bool,
    /// How the runner stopped
    pub stop: StopReason,
    /// Testcases whose body was invoked
    pub cases_run: usize,
    /// Testcases never invoked because of the latch
    pub cases_skipped: usize,
}

impl RunSummary {
    /// Checks evaluated as true
    pub fn checks_passed(&self) -> usize {
        self.checks_run - self.checks_failed
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.checks_failed > 0
    }

    /// Process exit status: the failure count, capped at
    /// [`MAX_FAILURE_STATUS`]
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.checks_failed)
            .unwrap_or(u8::MAX)
            .min(MAX_FAILURE_STATUS)
    }
}

/// Drives a registry through one run
pub struct Runner {
    registry: Registry,
    reporter: Reporter,
    state: RunState,
    /// Set once `run` has finished; a runner only runs once
    finished: Option<RunSummary>,
}

impl Runner {
    /// Create a runner reporting to stderr
    pub fn new(config: Config) -> Self {
        Self::from_parts(Registry::new(), Reporter::new(config))
    }

    /// Create a runner reporting to `out`
    pub fn with_writer(config: Config, out: Box<dyn Write>) -> Self {
        Self::from_parts(Registry::new(), Reporter::with_writer(config, out))
    }

    /// Create a runner from an already populated registry
    pub fn from_parts(registry: Registry, reporter: Reporter) -> Self {
        Self {
            registry,
            reporter,
            state: RunState::new(),
            finished: None,
        }
    }

    /// Registry, for the registration phase
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn reporter_mut(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    /// Counters and latch of this run
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Run every registered testcase in order.
    ///
    /// Before each testcase the latch is checked; once set, the remaining
    /// testcases are not invoked. A testcase that trips the latch still
    /// runs to the end of its body, but its later checks are skipped.
    ///
    /// Calling `run` again returns the first run's summary without
    /// invoking anything.
    pub fn run(&mut self) -> RunSummary {
        if let Some(summary) = &self.finished {
            tracing::warn!("runner already finished, not running again");
            return summary.clone();
        }

        let total = self.registry.len();
        let mut stop = StopReason::Exhausted;
        let mut cases_run = 0;

        for (index, case) in self.registry.iter_mut().enumerate() {
            if self.state.is_aborted() {
                tracing::debug!(skipped = total - index, "run latched, stopping");
                stop = StopReason::Latched;
                break;
            }

            tracing::debug!(testcase = case.name(), index, "running testcase");

            let (label, func) = case.split();
            let mut checker = Checker::new(&mut self.state, &mut self.reporter, label);
            func(&mut checker);
            cases_run += 1;
        }

        let summary = RunSummary {
            checks_run: self.state.checks_run(),
            checks_failed: self.state.checks_failed(),
            aborted: self.state.is_aborted(),
            stop,
            cases_run,
            cases_skipped: total - cases_run,
        };
        tracing::debug!(?summary, "run finished");

        self.finished = Some(summary.clone());
        summary
    }
}
