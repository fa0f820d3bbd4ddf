//! Hashing endpoints

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct HashRequest {
    /// Сообщение для хеширования
    pub message: String,
    /// Секретный ключ для HMAC
    pub key: String,
    /// Алгоритм хеширования (по умолчанию sha256, регистр не важен)
    #[serde(default)]
    pub algorithm: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HashResponse {
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmsResponse {
    pub algorithms: Vec<String>,
}

/// GET /algorithms
/// Список гарантированно доступных алгоритмов
pub async fn algorithms(State(state): State<AppState>) -> Json<AlgorithmsResponse> {
    let algorithms = state.services.hashing.algorithms();
    debug!("Listing {} algorithms", algorithms.len());
    Json(AlgorithmsResponse { algorithms })
}

/// POST /hash
/// Генерация HMAC подписи
pub async fn generate_hash(
    State(state): State<AppState>,
    payload: Result<Json<HashRequest>, JsonRejection>,
) -> Result<Json<HashResponse>, ApiError> {
    let Json(request) = payload?;

    // Ключ в лог не пишем
    info!(
        "Hash request: algorithm={:?}, message_len={}",
        request.algorithm,
        request.message.len()
    );

    let signature = state.services.hashing.sign(
        &request.message,
        &request.key,
        request.algorithm.as_deref(),
    )?;

    Ok(Json(HashResponse { signature }))
}
