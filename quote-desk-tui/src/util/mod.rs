//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：与页面内容无关的基础设施
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端进入 / 退出 TUI 模式
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 终端（terminal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Term = Terminal<CrosstermBackend<Stdout>>，主循环和 main.rs 都只写 Term。
//!
//!     init_terminal()
//!         raw mode            按键逐个送达，不回显
//!         备用屏幕             退出后原来的终端内容原样恢复
//!         鼠标捕获             点击与滚轮作为事件送达；遮罩层点击关闭依赖于此
//!
//!     restore_terminal()
//!         按相反顺序撤销上面三项并显示光标。
//!         main.rs 在 app::run 返回后立即调用，run 出错时也一样，
//!         否则用户的 shell 会停留在 raw mode。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 日志（logging.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     备用屏幕下向 stderr 输出会破坏画面，日志只写文件：
//!         <data_local_dir>/quote-desk/quote-desk.log
//!
//!     init_logging() 返回的 WorkerGuard 由 main 持有到退出，
//!     drop 时把缓冲区里剩余的日志刷入文件。
//!     quote-desk-core 与 quote-desk-relay 通过 log 门面记录，
//!     tracing-subscriber 的 tracing-log 桥一并收集。
//!     默认级别 info，RUST_LOG 可覆盖，例如 RUST_LOG=quote_desk_core=debug。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
