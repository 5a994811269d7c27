//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ DialogMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   quote-desk-     │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理（切换页面 / 打开页头对话框）
//!         mod content;            // 内容面板子消息处理（滚动 / 价格卡片）
//!         mod dialog;             // 对话框子消息处理（输入 / 提交 / 关闭）
//!
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {
//!             match msg {
//!                 AppMessage::Quit => app.should_quit = true,
//!                 AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
//!                 AppMessage::Content(content_msg) => content::update(app, content_msg),
//!                 AppMessage::Dialog(dialog_msg) => dialog::update(app, dialog_msg),
//!                 AppMessage::Background(event) => dialog::apply_background(app, event),
//!                 ...
//!             }
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 对话框更新（dialog.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - DialogMessage::Escape     交给 Site 的 Escape 监听注册表
//!     - DialogMessage::Cancel     关闭对话框（成功状态下禁用）
//!     - DialogMessage::Input(c)   输入字符；提交中 / 成功后被忽略
//!     - DialogMessage::Submit     本地校验 → 进入 submitting → 后台发送
//!     - DialogMessage::Click      遮罩层点击关闭，面板内点击聚焦字段
//!
//!     Submit 不会阻塞：中转请求在 tokio 运行时上执行，
//!     结果以 DialogEvent 的形式回到主循环，再经 AppMessage::Background 进入这里。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod dialog;
mod navigation;

use ratatui::layout::Rect;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有对话框打开，不切换焦点
            if !app.has_dialog() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Dialog(dialog_msg) => {
            dialog::update(app, dialog_msg);
        }

        AppMessage::Background(event) => {
            dialog::apply_background(app, event);
        }

        AppMessage::Resize(width, height) => {
            app.viewport = Rect::new(0, 0, width, height);
        }

        AppMessage::Noop => {}
    }
}
