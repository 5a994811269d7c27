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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//! 
//! 
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event}; 
//! 
//! 
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//! 
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件（点击、滚轮）
//!             Event::Resize(width , height)       // 终端窗口大小发生变化
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - Ctrl+C 始终退出；
//!                 - 有对话框打开时，调用 handle_dialog_keys 处理；
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理；
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 对话框键盘与鼠标处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Esc         → DialogMessage::Escape     （经由 Escape 监听注册表）
//!         Ctrl+X      → DialogMessage::Cancel
//!         Tab         → DialogMessage::NextField
//!         Shift+Tab   → DialogMessage::PrevField
//!         Enter       → DialogMessage::Submit
//!         字符输入     → DialogMessage::Input(c)
//!         Backspace   → DialogMessage::Backspace
//!         左键点击     → DialogMessage::Click { column, row }
//!
//!     点击落在对话框面板外还是面板内，由 Update 层根据上一帧的布局判断：
//!     面板外即点击遮罩层（关闭），面板内则聚焦光标下的字段。
//!
//!     滚轮总是翻译为 ContentMessage::ScrollUp / ScrollDown，
//!     对话框打开时页面滚动锁使它成为空操作。
//! 

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
