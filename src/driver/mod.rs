mod parse;
mod report;
mod session;
mod source;

pub use parse::{ParseReadingError, parse_reading};
pub use report::{OutputFormat, Report};
pub use session::{Session, SessionError, SessionStats};
pub use source::{LineSource, PromptSource, ReaderSource, SourceError};
