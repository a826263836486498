use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::SearchResult;
use crate::services::algorithm::DEFAULT_MAX_DEPTH;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS 允许的来源；`"*"` 表示任意来源
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// 迭代加深的深度上限
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "pathsearch".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> SearchResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> SearchResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> SearchResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.search.max_depth, 10);
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_config_load_save() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.search.max_depth = 4;
        config.save(temp_file.path()).expect("Failed to save config");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[server]\nport = 9000\n\n[search]\nmax_depth = 3\n")
            .expect("Failed to write TOML content to temporary file");

        let config = Config::load(temp_file.path()).expect("Failed to load config");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.search.max_depth, 3);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = Config::from_toml("[server]\nport = \"not a number\"\n");
        assert!(matches!(
            result,
            Err(crate::core::error::SearchError::Config(_))
        ));
    }
}
