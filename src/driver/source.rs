use inquire::{InquireError, Text};
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] InquireError),
}

/// Pull-based supplier of raw input lines.
///
/// Returns `Ok(None)` once input is exhausted; implementations must keep
/// returning `Ok(None)` after that. Line terminators are stripped, any
/// other whitespace is left for the parser.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>, SourceError>;
}

/// Lines read from any buffered reader (stdin, a file, an in-memory buffer).
///
/// Bytes that are not valid UTF-8 are decoded lossily (U+FFFD).
pub struct ReaderSource<R: BufRead> {
    reader: R,
    done: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        if self.done {
            return Ok(None);
        }
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            self.done = true;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Interactive source asking for one reading at a time through an
/// `inquire` text prompt.
///
/// Cancelling the prompt (Esc, Ctrl-C, Ctrl-D) ends the input like EOF.
pub struct PromptSource {
    title: String,
    help: String,
    done: bool,
}

impl PromptSource {
    pub fn new<T: Into<String>, H: Into<String>>(title: T, help: H) -> Self {
        Self {
            title: title.into(),
            help: help.into(),
            done: false,
        }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        Self::new(
            "Reading:",
            "Enter a number (`.` or `,` as decimal separator). Esc or Ctrl-C to finish.",
        )
    }
}

impl LineSource for PromptSource {
    fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        if self.done {
            return Ok(None);
        }
        match Text::new(&self.title).with_help_message(&self.help).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                self.done = true;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
