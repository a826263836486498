use axum::{
    http::{HeaderValue, Method, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use std::time::Duration;

use crate::config::ServerConfig;

use super::{
    handlers::{health, search},
    middleware::{error, logging},
    state::AppState,
};

/// 创建路由
///
/// # 参数
/// - `state`: 共享的应用状态
/// - `config`: 服务器配置，提供 CORS 来源与请求超时
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/search", post(search::execute))
        .route("/buscar", post(search::execute))
        .layer(middleware::from_fn(logging::logging_middleware))
        .layer(middleware::from_fn(error::error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .with_state(state)
}

/// 按配置的来源构建 CORS；`"*"` 允许任意来源
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
