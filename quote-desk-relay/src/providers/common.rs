//! Relay 公共工具函数

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::{RelayError, Result};

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// 创建带超时配置的 HTTP Client
///
/// 连接超时固定，整体请求超时由调用方决定（至少 1 秒）。
pub fn create_http_client(timeout_secs: u64, relay: &str) -> Result<Client> {
    let request_timeout = timeout_secs.max(1);
    Client::builder()
        .connect_timeout(Duration::from_secs(
            DEFAULT_CONNECT_TIMEOUT_SECS.min(request_timeout),
        ))
        .timeout(Duration::from_secs(request_timeout))
        .build()
        .map_err(|e| RelayError::InvalidConfig {
            relay: relay.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ Endpoint ============

/// 校验 endpoint：必须是 http(s) 绝对地址
pub fn parse_endpoint(endpoint: &str, relay: &str) -> Result<Url> {
    let url = Url::parse(endpoint.trim()).map_err(|e| RelayError::InvalidConfig {
        relay: relay.to_string(),
        detail: format!("Invalid endpoint '{endpoint}': {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::InvalidConfig {
            relay: relay.to_string(),
            detail: format!("Unsupported endpoint scheme: {other}"),
        }),
    }
}
