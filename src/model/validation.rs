use thiserror::Error;

/// Validation errors for caller-supplied field text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("model name cannot be empty")]
    EmptyModelName,
    #[error("{field} must be a numeric value, got {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// Parses a measurement entered as text.
///
/// Surrounding whitespace is ignored. Infinities and NaN are rejected since a
/// reference table cannot store them.
pub fn parse_measurement(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotNumeric {
            field,
            value: text.to_string(),
        }),
    }
}
