//! HTTP 服务器
//!
//! 持有配置与搜索服务，在收到关闭信号前持续提供路由服务。

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::services::search::SearchService;

use super::{router::create_router, state::AppState};

/// HTTP 服务器
pub struct HttpServer {
    config: Config,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(SearchService::new(config.search.clone()));
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone(), &self.config.server)
    }

    /// 绑定地址并提供服务，直到 `shutdown` 完成
    ///
    /// # 参数
    /// - `shutdown`: 关闭信号
    pub async fn run<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        log::info!("HTTP 服务器监听于 {}", address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
