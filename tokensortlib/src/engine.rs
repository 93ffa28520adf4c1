//! The sorting engine: drives a single run from input to report.
//!
//! A run moves through a fixed sequence of states:
//!
//! ```text
//! Init -> Parsed -> NaturallySorted | Aggregated -> Formatted -> Written -> Done
//! ```
//!
//! Any parse or IO failure moves the run to `Failed`; nothing is written
//! once a run has failed.

use std::io::Write;

use tracing::debug;

use crate::data::parser::{parse_tokens_with, skip_message};
use crate::error::SortError;
use crate::options::{SortMode, SortOptions};
use crate::output::Report;
use crate::{io, Result};

/// Position of a run in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Parsed,
    NaturallySorted,
    Aggregated,
    Formatted,
    Written,
    Done,
    Failed,
}

/// Drives parsing, sorting or aggregation, formatting and writing for one run.
#[derive(Debug)]
pub struct SortEngine {
    options: SortOptions,
    state: RunState,
}

impl SortEngine {
    pub fn new(options: SortOptions) -> Self {
        Self {
            options,
            state: RunState::Init,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Read the configured source, build the report and write it to the
    /// configured target.
    ///
    /// Skipped-token diagnostics are written to `diagnostics`, one per line,
    /// before the report is written.
    pub fn run<W: Write>(&mut self, diagnostics: &mut W) -> Result<Report> {
        let result = self.run_inner(diagnostics);
        if result.is_err() {
            self.transition(RunState::Failed);
        }
        result
    }

    fn run_inner<W: Write>(&mut self, diagnostics: &mut W) -> Result<Report> {
        self.ensure_unused()?;
        let text = io::read_source(&self.options.input)?;
        let report = self.build_report(&text, diagnostics)?;

        io::write_report(&self.options.output, &report.text())?;
        self.transition(RunState::Written);
        self.transition(RunState::Done);
        Ok(report)
    }

    /// Build the report for in-memory `text` without touching the configured
    /// source or target.
    ///
    /// Leaves the engine in `Formatted` on success.
    pub fn run_on_text<W: Write>(&mut self, text: &str, diagnostics: &mut W) -> Result<Report> {
        let result = self.build_report(text, diagnostics);
        if result.is_err() {
            self.transition(RunState::Failed);
        }
        result
    }

    fn build_report<W: Write>(&mut self, text: &str, diagnostics: &mut W) -> Result<Report> {
        self.ensure_unused()?;

        let mut skipped = 0usize;
        let mut dataset = parse_tokens_with(self.options.data_kind, text, |token| {
            skipped += 1;
            writeln!(diagnostics, "{}", skip_message(token))?;
            Ok(())
        })?;
        self.transition(RunState::Parsed);
        debug!(
            kind = self.options.data_kind.as_flag_value(),
            values = dataset.len(),
            skipped,
            "parsed input"
        );

        let report = match self.options.sort_mode {
            SortMode::Natural => {
                let report = Report::natural(&mut dataset);
                self.transition(RunState::NaturallySorted);
                report
            }
            SortMode::ByCount => {
                let report = Report::by_count(&dataset);
                self.transition(RunState::Aggregated);
                report
            }
        };
        self.transition(RunState::Formatted);
        Ok(report)
    }

    fn ensure_unused(&self) -> Result<()> {
        if self.state != RunState::Init {
            return Err(SortError::AlreadyRun(self.state));
        }
        Ok(())
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "run state");
        self.state = next;
    }
}
