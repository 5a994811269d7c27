//! 测试辅助模块
//!
//! 提供 mock relay 和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quote_desk_relay::{FieldSet, FormRelay, RelayError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::services::{DialogContext, DialogEvent};
use crate::types::SenderIdentity;

// ===== MockRelay =====

/// Relay that records every field set and answers from a script.
pub struct MockRelay {
    /// 按顺序返回的 HTTP 状态码；用完后返回 `fallback`
    script: Mutex<VecDeque<u16>>,
    fallback: u16,
    requests: Mutex<Vec<FieldSet>>,
}

impl MockRelay {
    pub fn new(fallback: u16) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::new(200))
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self::new(status))
    }

    /// Answers `statuses` in order before falling back.
    pub fn scripted(statuses: &[u16], fallback: u16) -> Arc<Self> {
        let relay = Self::new(fallback);
        relay.script.lock().unwrap().extend(statuses.iter().copied());
        Arc::new(relay)
    }

    pub fn requests(&self) -> Vec<FieldSet> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl FormRelay for MockRelay {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn submit(&self, fields: &FieldSet) -> Result<(), RelayError> {
        self.requests.lock().unwrap().push(fields.clone());
        let status = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback);

        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                relay: "mock".to_string(),
                status,
                raw_message: None,
            })
        }
    }
}

// ===== 工厂方法 =====

pub fn test_sender() -> SenderIdentity {
    SenderIdentity {
        access_key: "6138b91e-9848-49c9-bc70-422424d62dc2".to_string(),
        recipient: "notonce50@gmail.com".to_string(),
        sender_label: "L&SD Website".to_string(),
    }
}

/// 创建测试用 `DialogContext`（需在 tokio 运行时内调用）
pub fn create_test_context(
    relay: Arc<MockRelay>,
) -> (Arc<DialogContext>, UnboundedReceiver<DialogEvent>) {
    DialogContext::new(relay, test_sender(), Handle::current())
}

/// 让出若干次，使已就绪的后台任务跑完
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
