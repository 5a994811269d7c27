//! 核心服务
//!
//! 把配置组装成 quote-desk-core 的 `Site`：
//! 中转服务、发送方元数据与运行时句柄都在这里注入。

use anyhow::{Context, Result};
use quote_desk_core::types::SenderIdentity;
use quote_desk_core::{DialogContext, DialogEvent, Site};
use quote_desk_relay::{create_relay, RelayKind, RelaySettings};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use super::config_service::RelayConfig;

/// 根据配置创建页面及其后台事件接收端
///
/// `runtime` 用于执行提交请求与自动关闭定时器。
pub fn create_site(
    config: &RelayConfig,
    runtime: Handle,
) -> Result<(Site, UnboundedReceiver<DialogEvent>)> {
    let settings = RelaySettings {
        kind: RelayKind::Web3forms,
        endpoint: config.endpoint.clone(),
        timeout_secs: config.timeout_secs,
    };
    let relay = create_relay(&settings)
        .with_context(|| format!("Failed to create relay for {}", settings.endpoint))?;

    if config.access_key.trim().is_empty() {
        log::warn!(
            "No relay access key configured; submissions will be rejected by {}",
            relay.id()
        );
    }

    let sender = SenderIdentity {
        access_key: config.access_key.clone(),
        recipient: config.recipient.clone(),
        sender_label: config.sender_label.clone(),
    };

    let (ctx, events) = DialogContext::new(relay, sender, runtime);
    log::info!(
        "Relay {} ready at {} (timeout {}s)",
        settings.kind.id(),
        settings.endpoint,
        settings.timeout_secs
    );

    Ok((Site::new(ctx), events))
}
