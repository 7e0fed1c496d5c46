use crate::driver::{LineSource, SourceError};
use std::collections::VecDeque;

/// Replays a fixed list of lines, then reports end of input.
pub struct ScriptedSource {
    lines: VecDeque<String>,
    pub served: usize,
}

impl ScriptedSource {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            served: 0,
        }
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.served += 1;
        }
        Ok(line)
    }
}
