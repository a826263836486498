use anyhow::Result;
use log::{info, warn};
use tokio::signal;

pub mod server;

use crate::api::server::HttpServer;
use crate::config::Config;
use crate::utils::logging;

/// 启动 HTTP 服务
///
/// 加载配置并初始化日志，在收到 Ctrl+C 或 SIGTERM 前持续服务。
///
/// # 参数
/// - `config_path`: 配置文件路径，加载失败时使用默认配置
pub async fn start_service(config_path: String) -> Result<()> {
    let (config, load_error) = match Config::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("Failed to initialize file logging: {}", e);
    }

    if let Some(e) = load_error {
        warn!(
            "Failed to load config from '{}': {}, using default config",
            config_path, e
        );
    }
    info!("Configuration loaded: {:?}", config);

    let result = HttpServer::new(config).run(shutdown_signal()).await;

    info!("Shutting down pathsearch service");
    logging::shutdown();
    result
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
