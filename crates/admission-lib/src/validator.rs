//! Scalar input validation

use crate::schema::FieldKind;
use thiserror::Error;

/// Errors produced when validating a single raw input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("must be a valid number")]
    NotANumber,
    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
}

/// Validate one raw scalar input against a kind and an inclusive range.
///
/// The parsed value is returned exactly as entered, with no rounding or
/// truncation. Integer fields reject real-looking text ("3.5") rather than
/// truncating it. Non-finite input ("nan", "inf") is rejected as
/// `NotANumber`: NaN compares false against both bounds and would otherwise
/// escape the range check.
pub fn validate(raw: &str, kind: FieldKind, min: f64, max: f64) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    let value = match kind {
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(|v| v as f64)
            .map_err(|_| ValidationError::NotANumber)?,
        FieldKind::Real => {
            let value: f64 = raw.parse().map_err(|_| ValidationError::NotANumber)?;
            if !value.is_finite() {
                return Err(ValidationError::NotANumber);
            }
            value
        }
    };
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { min, max });
    }
    Ok(value)
}
