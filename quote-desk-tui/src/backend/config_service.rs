//! 配置服务
//!
//! 配置文件为 `<config_dir>/quote-desk/config.toml`，每个字段都有默认值：
//!
//! ```toml
//! theme = "dark"
//! language = "en-US"
//!
//! [relay]
//! endpoint = "https://api.web3forms.com/submit"
//! access_key = "..."
//! recipient = "notonce50@gmail.com"
//! sender_label = "L&SD Website"
//! timeout_secs = 15
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 覆盖 `relay.access_key` 的环境变量
pub const ACCESS_KEY_ENV: &str = "QUOTE_DESK_ACCESS_KEY";
/// 覆盖 `relay.endpoint` 的环境变量
pub const ENDPOINT_ENV: &str = "QUOTE_DESK_ENDPOINT";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    pub relay: RelayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            relay: RelayConfig::default(),
        }
    }
}

/// 表单中转配置
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub recipient: String,
    pub sender_label: String,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: quote_desk_relay::WEB3FORMS_ENDPOINT.to_string(),
            access_key: String::new(),
            recipient: "notonce50@gmail.com".to_string(),
            sender_label: "L&SD Website".to_string(),
            timeout_secs: 15,
        }
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "access_key",
                &quote_desk_relay::log_sanitizer::mask_secret(&self.access_key),
            )
            .field("recipient", &self.recipient)
            .field("sender_label", &self.sender_label)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// 用环境变量覆盖配置文件中的值
    ///
    /// `lookup` 通常为 `std::env::var(..).ok()`，测试中可替换。
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ACCESS_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.relay.access_key = key;
        }
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.relay.endpoint = endpoint;
        }
    }
}

/// 配置文件错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No configuration directory on this platform")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（TOML 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台默认路径 `<config_dir>/quote-desk/config.toml`
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join("quote-desk").join("config.toml")))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let text = toml::to_string_pretty(config).map_err(ConfigError::from)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, text).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.toml"));

        let config = service.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.relay.endpoint, "https://api.web3forms.com/submit");
        assert_eq!(config.relay.recipient, "notonce50@gmail.com");
        assert_eq!(config.relay.timeout_secs, 15);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "theme = \"light\"\n\n[relay]\naccess_key = \"abc-123\"\n",
        )
        .unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.relay.access_key, "abc-123");
        assert_eq!(config.relay.sender_label, "L&SD Website");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [not toml").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();

        assert!(err.to_string().contains("Malformed config file"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.toml"));
        let mut config = AppConfig::default();
        config.language = "zh-CN".to_string();
        config.relay.timeout_secs = 30;

        service.save(&config).unwrap();

        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(|name| match name {
            ACCESS_KEY_ENV => Some("from-env".to_string()),
            ENDPOINT_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.relay.access_key, "from-env");
        // 空白值不覆盖
        assert_eq!(config.relay.endpoint, "https://api.web3forms.com/submit");
    }

    #[test]
    fn test_debug_masks_access_key() {
        let mut relay = RelayConfig::default();
        relay.access_key = "6138b91e-9848-49c9-bc70-422424d62dc2".to_string();

        let rendered = format!("{relay:?}");

        assert!(!rendered.contains("422424d62dc2"));
    }
}
