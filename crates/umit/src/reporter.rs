//! Test reporter - write check outcomes to the diagnostic stream

use crate::check::CheckOutcome;
use crate::registry::CaseLabel;
use crate::runner::RunSummary;
use colored::Color;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use umit_config::Config;

/// Reporter with output configuration.
///
/// Write errors are ignored: reporting never fails a run.
pub struct Reporter {
    config: Config,
    out: Box<dyn Write>,
}

impl Reporter {
    /// Create a reporter writing to stderr
    pub fn new(config: Config) -> Self {
        Self::with_writer(config, Box::new(io::stderr()))
    }

    /// Create a reporter writing to `out`
    pub fn with_writer(config: Config, out: Box<dyn Write>) -> Self {
        Self { config, out }
    }

    /// Report one check outcome.
    ///
    /// Failures are always written. Passing checks are written only with
    /// `show_passed`. In verbose mode the testcase header precedes the
    /// first line written for that testcase.
    pub fn report(&mut self, outcome: &CheckOutcome<'_>, case: &mut CaseLabel<'_>) {
        if outcome.passed && !self.config.show_passed {
            return;
        }

        if self.config.verbose && !*case.logged {
            let _ = writeln!(self.out, "In testcase '{}':", case.name);
            *case.logged = true;
        }

        let line = self.format_outcome(outcome);
        let _ = writeln!(self.out, "{}", line);
    }

    /// Notice printed when a failed assertion stopped the run
    pub fn report_abort(&mut self) {
        let _ = writeln!(self.out, "Test aborted due to failed assertion");
    }

    /// Final `<passed> of <run> tests passed` line
    pub fn report_summary(&mut self, summary: &RunSummary) {
        let _ = writeln!(
            self.out,
            "{} of {} tests passed",
            summary.checks_passed(),
            summary.checks_run
        );
        let _ = self.out.flush();
    }

    /// Format a single report line
    fn format_outcome(&self, outcome: &CheckOutcome<'_>) -> String {
        let indent = if self.config.verbose { "  " } else { "" };
        let status = if outcome.passed { "passed" } else { "failed" };
        let message = format!(
            "{} '{}' {} ({}:{})",
            outcome.kind, outcome.expr, status, outcome.file, outcome.line
        );

        if !self.config.color {
            return format!("{}{}", indent, message);
        }

        let color = if outcome.passed {
            Color::Green
        } else {
            Color::Red
        };
        format!("{}{}", indent, paint(&message, color))
    }
}

/// Wrap `text` in the ANSI foreground sequence for `color`.
///
/// Unlike `Colorize`, this ignores `colored`'s terminal detection, which
/// looks at stdout while the report goes to stderr. Whether to color at
/// all is decided once, when the `Config` is resolved.
fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
}

/// Cloneable in-memory writer, for capturing a run's report
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
