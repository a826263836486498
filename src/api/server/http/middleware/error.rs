use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use log::{error, warn};

/// 按状态码级别记录被拒绝和失败的请求
pub async fn error_logging_middleware(
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        error!("{} {} returned {}", method, path, status);
    } else if status.is_client_error() {
        warn!("{} {} rejected with {}", method, path, status);
    }

    response
}
