use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::{ErrorCode, PublicError, SearchError, ToPublicError};

/// HTTP 层错误
#[derive(Debug)]
pub enum HttpError {
    /// 搜索开始前被拒绝的请求
    BadRequest { code: ErrorCode, message: String },
    InternalError(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { code, .. } => {
                StatusCode::from_u16(code.category().to_http_status())
                    .unwrap_or(StatusCode::BAD_REQUEST)
            }
            HttpError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            HttpError::BadRequest { code, message } => (code, message),
            HttpError::InternalError(msg) => {
                log::error!("internal error: {}", msg);
                let public = PublicError::with_default_message(ErrorCode::InternalError);
                (public.code, public.message)
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code.as_i32(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<SearchError> for HttpError {
    fn from(err: SearchError) -> Self {
        let public = err.to_public_error();
        if public.code.is_client_error() {
            HttpError::BadRequest {
                code: public.code,
                message: public.message,
            }
        } else {
            HttpError::InternalError(err.to_string())
        }
    }
}
