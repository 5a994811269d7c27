//! 测试辅助：假中转服务与应用工厂

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quote_desk_core::types::SenderIdentity;
use quote_desk_core::{DialogContext, DialogEvent, Site};
use quote_desk_relay::{FieldSet, FormRelay, RelayError};
use ratatui::layout::Rect;
use tokio::runtime::Handle;

use crate::model::App;

/// 固定以同一状态码应答的中转服务
pub struct StubRelay {
    status: u16,
    submitted: Mutex<Vec<FieldSet>>,
}

impl StubRelay {
    pub fn submitted(&self) -> Vec<FieldSet> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormRelay for StubRelay {
    fn id(&self) -> &'static str {
        "stub"
    }

    async fn submit(&self, fields: &FieldSet) -> Result<(), RelayError> {
        self.submitted.lock().unwrap().push(fields.clone());
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                relay: "stub".to_string(),
                status: self.status,
                raw_message: None,
            })
        }
    }
}

/// 中转服务总是成功的应用（需在 tokio 运行时内调用）
pub fn test_app() -> (App, Arc<StubRelay>) {
    test_app_answering(200)
}

/// 中转服务以 `status` 应答的应用
pub fn test_app_answering(status: u16) -> (App, Arc<StubRelay>) {
    let relay = Arc::new(StubRelay {
        status,
        submitted: Mutex::new(Vec::new()),
    });
    let sender = SenderIdentity {
        access_key: "test-key".to_string(),
        recipient: "sales@example.com".to_string(),
        sender_label: "L&SD Website".to_string(),
    };
    let (ctx, events) = DialogContext::new(relay.clone(), sender, Handle::current());

    let mut app = App::new(Site::new(ctx), events);
    app.viewport = Rect::new(0, 0, 100, 32);
    (app, relay)
}

/// 等待下一个后台事件
pub async fn next_event(app: &mut App) -> DialogEvent {
    for _ in 0..100 {
        if let Some(event) = app.next_event() {
            return event;
        }
        tokio::task::yield_now().await;
    }
    panic!("no background event arrived");
}
