//! HTTP сервер
//!
//! Этот модуль отвечает за:
//! 1. Создание HTTP роутера
//! 2. Настройку маршрутов (endpoints) для API
//! 3. Запуск HTTP сервера

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::handlers;
use crate::services::Services;

/// Запускает HTTP сервер
///
/// Функция работает, пока сервер не остановят (Ctrl+C)
pub async fn start(config: Config, services: Services) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let app = create_router(config, services);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Создает HTTP роутер с маршрутами
pub fn create_router(config: Config, services: Services) -> Router {
    let state = AppState { config, services };

    Router::new()
        // GET / - приветствие и ссылки на эндпоинты
        .route("/", get(handlers::root::index))
        // GET /algorithms - список доступных алгоритмов
        .route("/algorithms", get(handlers::hash::algorithms))
        // POST /hash - генерация HMAC подписи
        .route("/hash", post(handlers::hash::generate_hash))
        // GET /health - проверка работоспособности
        .route("/health", get(|| async { "OK" }))
        // permissive() - разрешает все запросы
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Состояние приложения, доступное во всех обработчиках.
/// Только для чтения: клонируется на каждый запрос.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub services: Services,
}
