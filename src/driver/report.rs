use crate::core::{LockoutViolation, Outcome};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{Result as IoResult, Write};
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// How reports are written to the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, StrumDisplay, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable sentences.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// What happened to one line of input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    Mean {
        input: f64,
        mean: f64,
        window_len: usize,
    },
    NoResult {
        input: f64,
    },
    Rejected {
        input: f64,
        elapsed_secs: f64,
        #[serde(skip)]
        reason: LockoutViolation,
    },
    Unparsable {
        line: String,
    },
}

impl Report {
    pub fn from_submission(
        input: f64,
        result: Result<Outcome, LockoutViolation>,
        window_len: usize,
    ) -> Self {
        match result {
            Ok(Outcome::Mean(mean)) => Report::Mean {
                input,
                mean,
                window_len,
            },
            Ok(Outcome::NoResult) => Report::NoResult { input },
            Err(reason) => Report::Rejected {
                input,
                elapsed_secs: reason.elapsed_secs(),
                reason,
            },
        }
    }

    pub fn unparsable<L: Into<String>>(line: L) -> Self {
        Report::Unparsable { line: line.into() }
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, format: OutputFormat) -> IoResult<()> {
        match format {
            OutputFormat::Text => writeln!(out, "{self}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Report::Mean {
                input,
                mean,
                window_len,
            } => write!(f, "(input {input}) -> mean of last {window_len} = {mean}"),
            Report::NoResult { input } => {
                write!(f, "(input {input}) -> no mean yet (zero received or window empty)")
            }
            Report::Rejected { input, reason, .. } => {
                write!(f, "error: {reason}; input {input} dropped")
            }
            Report::Unparsable { line } => write!(f, "cannot parse number: {line}"),
        }
    }
}
