//! Ошибки HTTP слоя
//!
//! Любой не-2xx ответ сервиса имеет тело `{"detail": "..."}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::hashing::HashingError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Hashing(#[from] HashingError),
    /// Некорректное тело запроса (синтаксис JSON, типы полей, Content-Type)
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Hashing(HashingError::UnsupportedAlgorithm(_))
            | Self::Hashing(HashingError::AlgorithmNotFound(_)) => StatusCode::BAD_REQUEST,
            Self::Hashing(HashingError::InvalidKey(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Json(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            // Подробности внутренних ошибок клиенту не отдаем
            Self::Hashing(HashingError::InvalidKey(_)) => {
                error!("Internal hashing error: {}", self);
                "Internal server error".to_string()
            }
            Self::Json(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
