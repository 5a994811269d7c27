//! Web3Forms API 类型定义

use serde::Deserialize;

/// Web3Forms 响应体
///
/// 只用于日志；成功与否只看 HTTP 状态码。
#[derive(Debug, Deserialize)]
pub struct Web3FormsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
