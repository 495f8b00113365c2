use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки валидации входных данных
///
/// Всегда восстановимые: возвращаются вызывающей стороне с именем поля.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must start with '{prefix}', got '{value}'")]
    BadPrefix {
        field: &'static str,
        prefix: &'static str,
        value: String,
    },

    #[error("Identifier '{id}' already exists")]
    DuplicateId { field: &'static str, id: String },

    #[error("Field '{field}' is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationError {
    /// Имя поля, к которому относится ошибка
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::BadPrefix { field, .. }
            | ValidationError::DuplicateId { field, .. }
            | ValidationError::InvalidValue { field, .. } => field,
        }
    }

    /// Машиночитаемый код ошибки
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::BadPrefix { .. } => "bad_prefix",
            ValidationError::DuplicateId { .. } => "duplicate_id",
            ValidationError::InvalidValue { .. } => "invalid_value",
        }
    }
}

/// Тело ответа об ошибке, возвращаемое API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// "missing_field", "bad_prefix", "duplicate_id", "invalid_value",
    /// "not_found" или "datastore"
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&ValidationError> for ErrorResponse {
    fn from(e: &ValidationError) -> Self {
        Self {
            kind: e.kind().to_string(),
            message: e.to_string(),
            field: Some(e.field().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_prefix_message_names_prefix() {
        let err = ValidationError::BadPrefix {
            field: "id",
            prefix: "ST",
            value: "XX001".into(),
        };
        assert_eq!(err.kind(), "bad_prefix");
        assert_eq!(err.field(), "id");
        assert!(err.to_string().contains("'ST'"));
    }

    #[test]
    fn test_error_response_from_validation() {
        let err = ValidationError::MissingField { field: "city" };
        let body = ErrorResponse::from(&err);
        assert_eq!(body.kind, "missing_field");
        assert_eq!(body.field.as_deref(), Some("city"));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["kind"], "missing_field");
        assert_eq!(json["field"], "city");
    }

    #[test]
    fn test_error_response_omits_empty_field() {
        let body = ErrorResponse {
            kind: "not_found".into(),
            message: "Store 'ST404' not found".into(),
            field: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("field").is_none());
    }
}
