use contracts::shared::api::{ApiError, FieldError};
use std::fmt;

/// Failure of a user-initiated operation, as the UI presents it.
///
/// Validation errors are shown next to the offending inputs, request
/// errors as a dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },
    #[error("{0}")]
    Request(String),
}

impl UiError {
    pub fn request(err: impl fmt::Display) -> Self {
        UiError::Request(err.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, UiError::Validation { .. })
    }

    /// Inline message for `field`, if the server rejected it
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            UiError::Validation { fields, .. } => fields
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.as_str()),
            UiError::Request(_) => None,
        }
    }
}

impl From<ApiError> for UiError {
    fn from(err: ApiError) -> Self {
        let message = err.summary();
        if err.has_field_errors() {
            UiError::Validation {
                message,
                fields: err.errors,
            }
        } else {
            UiError::Request(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_fields_is_validation() {
        let err: UiError = ApiError {
            message: Some("Invalid vehicle".into()),
            errors: vec![FieldError {
                field: "capacity_kg".into(),
                message: "must be positive".into(),
            }],
        }
        .into();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid vehicle");
        assert_eq!(err.field_message("capacity_kg"), Some("must be positive"));
        assert_eq!(err.field_message("plate_number"), None);
    }

    #[test]
    fn test_api_error_without_fields_is_request() {
        let err: UiError = ApiError {
            message: Some("Warehouse is archived".into()),
            errors: vec![],
        }
        .into();
        assert_eq!(err, UiError::Request("Warehouse is archived".into()));
        assert_eq!(err.field_message("name"), None);
    }

    #[test]
    fn test_request_from_display() {
        let err = UiError::request(format_args!("Failed to send request: {}", 503));
        assert_eq!(err.to_string(), "Failed to send request: 503");
    }
}
