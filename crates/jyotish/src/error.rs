use thiserror::Error;

use crate::ephemeris::EphemerisError;

/// Errors returned by chart computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid {field} '{value}': expected {expected}")]
    InputFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("Ephemeris lookup failed: {0}")]
    EphemerisLookup(#[from] EphemerisError),
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ChartError {
    pub(crate) fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<()> {
        // NaN fails `contains` and is reported as out of range.
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ChartError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
