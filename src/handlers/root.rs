//! Root endpoint

use std::collections::BTreeMap;

use axum::{extract::State, http::header::HOST, http::HeaderMap, response::Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub available_endpoints: BTreeMap<String, String>,
    pub documentation: BTreeMap<String, String>,
}

/// GET /
/// Приветствие и ссылки на эндпоинты
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Json<RootResponse> {
    let base_url = base_url(&state, &headers);

    let available_endpoints = BTreeMap::from([
        ("Generate Hash".to_string(), format!("{}/hash", base_url)),
        ("List Algorithms".to_string(), format!("{}/algorithms", base_url)),
    ]);
    let documentation = BTreeMap::from([
        ("Swagger UI".to_string(), format!("{}/docs", base_url)),
        ("ReDoc".to_string(), format!("{}/redoc", base_url)),
        ("OpenAPI Spec".to_string(), format!("{}/openapi.json", base_url)),
    ]);

    Json(RootResponse {
        message: "Welcome to the HMAC Hashing API.".to_string(),
        available_endpoints,
        documentation,
    })
}

/// Базовый URL из заголовка Host, иначе из конфигурации
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    let host = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.to_string())
        .unwrap_or_else(|| format!("{}:{}", state.config.server.host, state.config.server.port));

    format!("http://{}", host).trim_end_matches('/').to_string()
}
