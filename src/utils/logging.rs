// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，进程退出前 flush 异步日志

use crate::config::Config;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 按 `config.log` 初始化文件日志
///
/// # 参数
/// * `config` - 应用配置，包含日志相关参数
///
/// # 返回
/// * `Ok(())` - 初始化成功
/// * `Err(Box<dyn std::error::Error>)` - 初始化失败
///
/// # Examples
/// ```no_run
/// use pathsearch::config::Config;
/// use pathsearch::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str(&config.log.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log.file)
                .directory(&config.log.dir),
        )
        .rotate(
            Criterion::Size(config.log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    store(handle);

    log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

/// 只输出到 stderr，用于单次 CLI 运行
pub fn init_stderr(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str(level)?.log_to_stderr().start()?;
    store(handle);
    Ok(())
}

fn store(handle: LoggerHandle) {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }
}

/// 关闭日志系统
///
/// 阻塞直到异步写入全部 flush
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_and_shutdown() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = Config::default();
        config.log.dir = dir.path().to_string_lossy().into_owned();
        config.log.level = "debug".to_string();

        let result = init(&config);
        assert!(result.is_ok(), "logging init failed: {:?}", result.err());
        assert!(is_initialized());

        log::info!("test log line");

        shutdown();
        assert!(!is_initialized());
    }
}
