//! 共享测试工具和辅助函数

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quote_desk_core::types::SenderIdentity;
use quote_desk_core::{DialogContext, DialogEvent, Site};
use quote_desk_relay::{FieldSet, FormRelay, RelayError};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

/// 固定返回某个状态码的 relay，并记录所有请求
pub struct ScriptedRelay {
    status: u16,
    requests: Mutex<Vec<FieldSet>>,
}

impl ScriptedRelay {
    pub fn answering(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<FieldSet> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormRelay for ScriptedRelay {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn submit(&self, fields: &FieldSet) -> Result<(), RelayError> {
        self.requests.lock().unwrap().push(fields.clone());
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                relay: "scripted".to_string(),
                status: self.status,
                raw_message: None,
            })
        }
    }
}

/// 页面 + 事件接收端
pub struct Harness {
    pub site: Site,
    pub events: UnboundedReceiver<DialogEvent>,
    pub relay: Arc<ScriptedRelay>,
}

impl Harness {
    /// 需在 tokio 运行时内调用
    pub fn new(status: u16) -> Self {
        let relay = ScriptedRelay::answering(status);
        let sender = SenderIdentity {
            access_key: "6138b91e-9848-49c9-bc70-422424d62dc2".to_string(),
            recipient: "notonce50@gmail.com".to_string(),
            sender_label: "L&SD Website".to_string(),
        };
        let (ctx, events) = DialogContext::new(relay.clone(), sender, Handle::current());
        Self {
            site: Site::new(ctx),
            events,
            relay,
        }
    }

    /// 等待下一个后台事件并交给页面处理
    pub async fn pump(&mut self) -> bool {
        let event = self.events.recv().await.unwrap();
        self.site.apply(event)
    }

    pub async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }
}
