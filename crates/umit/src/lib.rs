//! umit - useful minimal testing framework
//!
//! Runs user testcases in registration order and evaluates two kinds of
//! checks inside them:
//! - **Assertions** (`umit_assert!`): a failure latches the run. Every later
//!   check is skipped without being evaluated and no further testcase starts.
//! - **Expectations** (`umit_expect!`): a failure is recorded and reported,
//!   and the run carries on.
//!
//! All run state lives in a [`Runner`], so independent runs can coexist in
//! one process.
//!
//! # Example
//!
//! ```
//! use umit::{umit_assert, umit_expect, Checker, Config, Runner};
//!
//! fn arithmetic(t: &mut Checker<'_>) {
//!     umit_expect!(t, 4 > 10);
//!     umit_assert!(t, 5 == 5);
//! }
//!
//! let mut runner = Runner::new(Config::default().with_color(false));
//! runner.registry_mut().register(arithmetic, "arithmetic");
//! let summary = runner.run();
//!
//! assert_eq!(summary.checks_run, 2);
//! assert_eq!(summary.checks_failed, 1);
//! assert!(!summary.aborted);
//! ```

pub mod check;
pub mod harness;
mod macros;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod state;

pub use check::{CheckKind, CheckOutcome, Checker};
pub use registry::{Registry, TestCase, TestFn, MAX_NAME_LEN};
pub use reporter::{Reporter, SharedBuffer};
pub use runner::{RunSummary, Runner, StopReason, MAX_FAILURE_STATUS};
pub use state::RunState;
pub use umit_config::Config;
