//! 路径搜索错误处理
//!
//! 只有前置条件失败才是错误。搜索耗尽、目标不可达或达到深度上限
//! 都由算法返回 `Ok(None)`，不会产生 `SearchError`。
//!
//! 外部错误（I/O、TOML）被展平为字符串，错误类型保持 `Clone`，
//! 也不依赖这些 crate。

use std::fmt;

use thiserror::Error;

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode, PublicError, ToPublicError};

/// 节点在查询中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Start => write!(f, "start"),
            NodeRole::Goal => write!(f, "goal"),
        }
    }
}

/// 搜索错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("{role} node '{node}' does not exist in the graph")]
    UnknownNode { role: NodeRole, node: String },

    #[error("node '{node}' has no coordinates; the heuristic cannot be evaluated")]
    MissingCoordinates { node: String },

    #[error("unrecognized algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("algorithm {0} requires a depth limit")]
    MissingDepthLimit(String),

    #[error("edge '{edge}' has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { edge: String, weight: f64 },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

impl SearchError {
    pub fn unknown_node(role: NodeRole, node: impl fmt::Display) -> Self {
        SearchError::UnknownNode {
            role,
            node: node.to_string(),
        }
    }

    pub fn missing_coordinates(node: impl fmt::Display) -> Self {
        SearchError::MissingCoordinates {
            node: node.to_string(),
        }
    }
}

impl ToPublicError for SearchError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            SearchError::UnknownNode { .. } => ErrorCode::NodeNotFound,
            SearchError::MissingCoordinates { .. } => ErrorCode::MissingCoordinates,
            SearchError::UnknownAlgorithm(_) => ErrorCode::UnknownAlgorithm,
            SearchError::MissingDepthLimit(_) => ErrorCode::MissingParameter,
            SearchError::InvalidWeight { .. } => ErrorCode::InvalidInput,
            SearchError::Parse { .. } => ErrorCode::ParseError,
            SearchError::Io(_) | SearchError::Config(_) => ErrorCode::InternalError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            // 内部细节只留在日志中
            SearchError::Io(_) => "IO operation failed".to_string(),
            SearchError::Config(_) => "server configuration error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        SearchError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SearchError {
    fn from(err: toml::ser::Error) -> Self {
        SearchError::Config(err.to_string())
    }
}
