use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::error::{ErrorResponse, ValidationError};
use thiserror::Error;

/// Ошибка сервисного слоя
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    /// Сбой хранилища: детали пишутся в лог, клиенту уходит общее сообщение
    #[error("Datastore error: {0}")]
    Datastore(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn not_found(element: &str, id: &str) -> Self {
        ServiceError::NotFound(format!("{} '{}' not found", element, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Datastore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        match self {
            ServiceError::Validation(e) => ErrorResponse::from(e),
            ServiceError::NotFound(message) => ErrorResponse {
                kind: "not_found".into(),
                message: message.clone(),
                field: None,
            },
            ServiceError::Datastore(_) => ErrorResponse {
                kind: "datastore".into(),
                message: "Internal datastore error".into(),
                field: None,
            },
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Datastore(e) = &self {
            tracing::error!("Datastore failure: {:#}", e);
        }
        (self.status(), Json(self.to_response_body())).into_response()
    }
}
