//! Process entry point for test programs
//!
//! A test program registers its testcases in an init hook and hands it to
//! [`main`]:
//!
//! ```no_run
//! use std::process::ExitCode;
//! use umit::{umit_expect, umit_register, Checker, Registry};
//!
//! fn addition(t: &mut Checker<'_>) {
//!     umit_expect!(t, 2 + 2 == 4);
//! }
//!
//! fn init_tests(registry: &mut Registry) {
//!     umit_register!(registry, addition);
//! }
//!
//! fn main() -> ExitCode {
//!     umit::harness::main(init_tests, || {})
//! }
//! ```

use crate::registry::Registry;
use crate::runner::{RunSummary, Runner};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Once;
use umit_config::{Config, ConfigLoader};

static TRACING_INIT: Once = Once::new();

/// Exit status for a bad command line or configuration.
///
/// Failure counts are capped below it, see
/// [`MAX_FAILURE_STATUS`](crate::runner::MAX_FAILURE_STATUS).
pub const USAGE_ERROR_STATUS: u8 = 254;

/// Useful minimal testing-framework.
///
/// Runs the registered testcases in order. Failed checks are always
/// reported; a failed assertion stops the run. The exit status is the
/// number of failed checks (at most 253); 254 means a usage or
/// configuration error.
///
/// ENVIRONMENT VARIABLES:
///     NO_COLOR, UMIT_NO_COLOR   Disable colored output
///     UMIT_COLOR                Enable or disable colored output
///     UMIT_SHOW_PASSED          Enable or disable lines for passed checks
///     UMIT_VERBOSE              Enable or disable verbose output
///     UMIT_LOG                  Internal log filter (e.g. `umit=debug`)
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(version)]
pub struct Args {
    /// No colored output
    #[arg(long)]
    pub no_color: bool,
    /// Only output failed tests
    #[arg(long)]
    pub no_passed: bool,
    /// Be less verbose
    #[arg(long)]
    pub no_verbose: bool,
}

impl Args {
    /// Apply the flags on top of a loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_color {
            config.color = false;
        }
        if self.no_passed {
            config.show_passed = false;
        }
        if self.no_verbose {
            config.verbose = false;
        }
        config
    }
}

/// Initialize internal logging.
///
/// Only installs a subscriber when `UMIT_LOG` is set, so the report stays
/// the only output by default. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("UMIT_LOG").is_ok() {
            let filter = EnvFilter::from_env("UMIT_LOG");
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Parse arguments, resolve configuration and run the test program.
///
/// Returns the number of failed checks as exit status, or
/// [`USAGE_ERROR_STATUS`] if the program could not start. `--help` and
/// `--version` exit with 0.
pub fn main<I, C>(init: I, cleanup: C) -> ExitCode
where
    I: FnOnce(&mut Registry),
    C: FnOnce(),
{
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(USAGE_ERROR_STATUS)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match try_main(&args, init, cleanup) {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(e) => {
            if !io::stderr().is_terminal() {
                colored::control::set_override(false);
            }
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(USAGE_ERROR_STATUS)
        }
    }
}

/// Turn color off unless the report stream is a terminal
pub fn resolve_color(config: Config, report_is_terminal: bool) -> Config {
    config.with_color(config.color && report_is_terminal)
}

fn try_main<I, C>(args: &Args, init: I, cleanup: C) -> Result<RunSummary>
where
    I: FnOnce(&mut Registry),
    C: FnOnce(),
{
    init_tracing();

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = ConfigLoader::new()
        .load_from_directory(&cwd)
        .context("Failed to load configuration")?;
    let config = resolve_color(args.apply(config), io::stderr().is_terminal());

    Ok(execute(config, Box::new(io::stderr()), init, cleanup))
}

/// Run one test program against `out`.
///
/// Order: `init`, run, abort notice (verbose), `cleanup`, summary
/// (verbose). `cleanup` is called exactly once whatever the outcome.
pub fn execute<I, C>(config: Config, out: Box<dyn Write>, init: I, cleanup: C) -> RunSummary
where
    I: FnOnce(&mut Registry),
    C: FnOnce(),
{
    let mut runner = Runner::with_writer(config, out);

    init(runner.registry_mut());
    tracing::debug!(testcases = runner.registry().len(), "registration finished");

    let summary = runner.run();

    if summary.aborted && config.verbose {
        runner.reporter_mut().report_abort();
    }

    cleanup();

    if config.verbose {
        runner.reporter_mut().report_summary(&summary);
    }

    summary
}
