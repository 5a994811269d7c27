//! 页面服务层
//!
//! 每个页面区块独占自己的对话框与提交状态机，彼此不共享可变状态。

mod form_dialog;
mod header_section;
mod pricing_section;
mod site;

pub use form_dialog::{Feedback, FormDialog};
pub use header_section::HeaderSection;
pub use pricing_section::PricingSection;
pub use site::Site;

use std::sync::Arc;
use std::time::Duration;

use quote_desk_relay::{FormRelay, RelayError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::dialog::{DialogId, KeyListeners, ScrollLock};
use crate::submission::AUTO_DISMISS_DELAY;
use crate::types::{SenderIdentity, SubmissionTicket};

/// Result of a background task, delivered back to the owning dialog.
#[derive(Debug)]
pub enum DialogEvent {
    /// The relay answered (or failed) for `ticket`.
    Delivered {
        dialog: DialogId,
        ticket: SubmissionTicket,
        outcome: Result<(), RelayError>,
    },
    /// The post-success timer fired for `ticket`.
    AutoDismiss {
        dialog: DialogId,
        ticket: SubmissionTicket,
    },
}

impl DialogEvent {
    pub fn dialog(&self) -> DialogId {
        match self {
            Self::Delivered { dialog, .. } | Self::AutoDismiss { dialog, .. } => *dialog,
        }
    }

    pub fn ticket(&self) -> SubmissionTicket {
        match self {
            Self::Delivered { ticket, .. } | Self::AutoDismiss { ticket, .. } => *ticket,
        }
    }
}

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建此上下文，注入 relay 实现和运行时句柄。
pub struct DialogContext {
    /// 表单中转服务
    pub relay: Arc<dyn FormRelay>,
    /// 固定发送方元数据
    pub sender: SenderIdentity,
    /// 页面滚动锁
    pub scroll_lock: ScrollLock,
    /// Escape 键监听注册表
    pub key_listeners: KeyListeners,
    /// 后台任务运行时
    pub runtime: Handle,
    /// 成功后自动关闭的延时
    pub dismiss_after: Duration,
    events: UnboundedSender<DialogEvent>,
}

impl DialogContext {
    /// 创建服务上下文，同时返回事件接收端
    #[must_use]
    pub fn new(
        relay: Arc<dyn FormRelay>,
        sender: SenderIdentity,
        runtime: Handle,
    ) -> (Arc<Self>, UnboundedReceiver<DialogEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let ctx = Self {
            relay,
            sender,
            scroll_lock: ScrollLock::new(),
            key_listeners: KeyListeners::new(),
            runtime,
            dismiss_after: AUTO_DISMISS_DELAY,
            events,
        };
        (Arc::new(ctx), rx)
    }

    /// Sender half for background tasks.
    pub fn events(&self) -> UnboundedSender<DialogEvent> {
        self.events.clone()
    }
}

impl std::fmt::Debug for DialogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogContext")
            .field("relay", &self.relay.id())
            .field("sender", &self.sender)
            .field("dismiss_after", &self.dismiss_after)
            .field("scroll_lock_holders", &self.scroll_lock.holders())
            .finish_non_exhaustive()
    }
}
