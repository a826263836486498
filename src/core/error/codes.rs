//! 公共错误码
//!
//! HTTP 响应和 CLI 输出中使用的稳定数字码。
//!
//! 格式: XXYY
//! - XX: 类别 (00=成功, 01=语法, 03=校验, 05=资源, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 返回给客户端的公共错误码
///
/// 错误码属于传输格式，不能重新编号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ErrorCode {
    // ==================== 成功 (00xx) ====================
    #[default]
    Success = 0,

    // ==================== 语法 (01xx) ====================
    /// 图文件或请求体无法解析
    ParseError = 101,
    /// 所选算法需要的参数缺失
    MissingParameter = 103,

    // ==================== 校验 (03xx) ====================
    /// 输入值非法，例如负的边权
    InvalidInput = 302,
    /// 无法识别的算法名
    UnknownAlgorithm = 304,
    /// 需要计算启发值的节点没有坐标
    MissingCoordinates = 305,

    // ==================== 资源 (05xx) ====================
    /// 起点或终点不在图中
    NodeNotFound = 500,

    // ==================== 系统 (09xx) ====================
    /// 内部错误（I/O、配置）
    InternalError = 900,
}

impl ErrorCode {
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            0 => ErrorCategory::Success,
            100..=199 => ErrorCategory::Syntax,
            300..=399 => ErrorCategory::Validation,
            500..=599 => ErrorCategory::Resource,
            900..=999 => ErrorCategory::System,
            _ => ErrorCategory::Unknown,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "success",
            ErrorCode::ParseError => "parse error",
            ErrorCode::MissingParameter => "missing required parameter",
            ErrorCode::InvalidInput => "invalid input",
            ErrorCode::UnknownAlgorithm => "unknown algorithm",
            ErrorCode::MissingCoordinates => "missing coordinates",
            ErrorCode::NodeNotFound => "node not found",
            ErrorCode::InternalError => "internal server error",
        }
    }

    /// 请求被拒绝：调用方修改请求即可解决
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Syntax | ErrorCategory::Validation | ErrorCategory::Resource
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    Syntax,
    Validation,
    Resource,
    System,
    Unknown,
}

impl ErrorCategory {
    /// 类别对应的 HTTP 状态码，所有请求拒绝都是 400
    pub fn to_http_status(&self) -> u16 {
        match self {
            ErrorCategory::Success => 200,
            ErrorCategory::Syntax | ErrorCategory::Validation | ErrorCategory::Resource => 400,
            ErrorCategory::System | ErrorCategory::Unknown => 500,
        }
    }
}

/// 对外暴露的错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn with_default_message(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
        }
    }
}

/// 内部错误到公共错误的转换
///
/// 实现方负责过滤不应离开进程的细节。
pub trait ToPublicError {
    fn to_public_error(&self) -> PublicError;

    fn to_error_code(&self) -> ErrorCode;

    fn to_public_message(&self) -> String;
}
