use crate::core::{Clock, LOCKOUT, MonotonicClock, StreamAverager, WINDOW_CAPACITY};
use crate::driver::parse::parse_reading;
use crate::driver::report::{OutputFormat, Report};
use crate::driver::source::{LineSource, SourceError};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info_span};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Source(#[from] SourceError),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Per-session tallies, one bucket per [`Report`] kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Non-blank lines seen.
    pub lines: u64,
    pub accepted: u64,
    pub no_result: u64,
    pub rejected: u64,
    pub unparsable: u64,
}

impl SessionStats {
    fn record(&mut self, report: &Report) {
        self.lines += 1;
        match report {
            Report::Mean { .. } => self.accepted += 1,
            Report::NoResult { .. } => self.no_result += 1,
            Report::Rejected { .. } => self.rejected += 1,
            Report::Unparsable { .. } => self.unparsable += 1,
        }
    }
}

impl Display for SessionStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lines={}, accepted={}, no_result={}, rejected={}, unparsable={}",
            self.lines, self.accepted, self.no_result, self.rejected, self.unparsable
        )
    }
}

/// Drives a [`StreamAverager`] from a line source, one report per line.
pub struct Session<C: Clock = MonotonicClock> {
    averager: StreamAverager<C>,
    format: OutputFormat,
    banner: bool,
    stats: SessionStats,
}

impl Session<MonotonicClock> {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_averager(StreamAverager::new(), format)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_averager(averager: StreamAverager<C>, format: OutputFormat) -> Self {
        Self {
            averager,
            format,
            banner: false,
            stats: SessionStats::default(),
        }
    }

    /// Print a short usage banner before the first report (text format only).
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Handles one raw line. Blank lines yield `None` and are not counted.
    pub fn process_line(&mut self, line: &str) -> Option<Report> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let report = match parse_reading(trimmed) {
            Ok(value) => {
                let result = self.averager.submit(value);
                Report::from_submission(value, result, self.averager.len())
            }
            Err(e) => {
                debug!(line = %e.text, "skipping unparsable line");
                Report::unparsable(e.text)
            }
        };
        self.stats.record(&report);
        Some(report)
    }

    /// Reads `source` to exhaustion, writing every report to `out`.
    pub fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<SessionStats, SessionError>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let _span = info_span!("session", format = %self.format).entered();

        if self.banner && self.format == OutputFormat::Text {
            write_banner(out).map_err(SessionError::Output)?;
        }

        while let Some(line) = source.next_line()? {
            let Some(report) = self.process_line(&line) else {
                continue;
            };
            report
                .write_to(out, self.format)
                .map_err(SessionError::Output)?;
        }
        out.flush().map_err(SessionError::Output)?;

        debug!(stats = %self.stats, "input exhausted");
        Ok(self.stats)
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn averager(&self) -> &StreamAverager<C> {
        &self.averager
    }
}

fn write_banner<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "Mean of the last {WINDOW_CAPACITY} non-zero readings. A zero is not averaged \
         and blocks further input for {}s.",
        LOCKOUT.as_secs()
    )?;
    writeln!(
        out,
        "Enter one number per line. Finish with EOF (Ctrl+D on Linux/macOS, Ctrl+Z on Windows)."
    )?;
    writeln!(out, "{}", "-".repeat(62))
}
