//! HTTP 服务
//!
//! `POST /search`（别名 `POST /buscar`）执行一次查询，`GET /health` 报告存活状态。

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use error::HttpError;
pub use handlers::search::SearchBody;
pub use router::create_router;
pub use server::HttpServer;
pub use state::AppState;
