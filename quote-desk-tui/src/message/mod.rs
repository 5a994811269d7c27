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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ──→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod content;
//!         mod dialog;
//!         mod navigation;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive(Debug)]
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航面板子消息
//!             Content(ContentMessage),            // 内容面板子消息（滚动、选卡片）
//!             Dialog(DialogMessage),              // 对话框子消息（输入、提交、关闭）
//!             Background(DialogEvent),            // 后台任务回传的事件
//!             Resize(u16, u16),                   // 终端大小改变
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!     Background 携带的 DialogEvent 不可 Clone（内含中转错误），
//!     因此 AppMessage 只派生 Debug。
//!
//!
//!     两个来源产生消息：
//!         - src/event/handler.rs 把键盘/鼠标事件翻译成消息；
//!         - src/app.rs 每一轮循环从通道中取出后台事件，包装为 Background。
//!
//!     最后都交给 src/update/mod.rs 处理。
//!

mod app;
mod content;
mod dialog;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use dialog::DialogMessage;
pub use navigation::NavigationMessage;
