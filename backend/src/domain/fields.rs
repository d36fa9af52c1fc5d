//! Validation of free-text entity fields.

use serde_json::json;

use super::Error;

/// Reasons a submitted text field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldValidationError {
    /// The value was empty once trimmed.
    #[error("{field} must not be empty")]
    Blank {
        /// Submitted field name.
        field: &'static str,
    },
    /// The value exceeds the column width.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Submitted field name.
        field: &'static str,
        /// Maximum permitted length in characters.
        max: usize,
    },
}

impl FieldValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Blank { field } | Self::TooLong { field, .. } => *field,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Blank { .. } => "blank_field",
            Self::TooLong { .. } => "field_too_long",
        }
    }
}

impl From<FieldValidationError> for Error {
    fn from(err: FieldValidationError) -> Self {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": err.code(),
        }))
    }
}

/// Trim `raw` and ensure the result is non-empty and within `max` characters.
pub(crate) fn required_text(
    field: &'static str,
    raw: &str,
    max: Option<usize>,
) -> Result<String, FieldValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::Blank { field });
    }
    if let Some(max) = max {
        if trimmed.chars().count() > max {
            return Err(FieldValidationError::TooLong { field, max });
        }
    }
    Ok(trimmed.to_owned())
}
