//! 网络服务层

pub mod http;

pub use http::HttpServer;
