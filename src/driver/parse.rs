use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse number: {text}")]
pub struct ParseReadingError {
    pub text: String,
}

/// Parses one reading, accepting either `.` or `,` as the decimal separator.
///
/// Surrounding whitespace is ignored. Non-finite values (`nan`, `inf`) are
/// refused, since they would poison every mean they take part in.
pub fn parse_reading(text: &str) -> Result<f64, ParseReadingError> {
    let trimmed = text.trim();
    let fail = || ParseReadingError {
        text: trimmed.to_string(),
    };

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| fail())?;
    if !value.is_finite() {
        return Err(fail());
    }
    Ok(value)
}
