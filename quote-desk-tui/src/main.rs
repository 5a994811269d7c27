//! Quote Desk TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与核心服务组装 (`backend/`)
//!
//!
//! main.rs
//! Quote Desk TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_config()           // 读取配置（在进入原始模式之前，出错时能正常打印）
//!     init_logging()          // 文件日志
//!     Runtime::new()          // tokio 运行时，执行提交请求与定时器
//!     create_site()           // 组装 Site（页头 + 价格区块及其对话框）
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen , EnableMouseCapture)?
//!             - 切换到 备用屏幕，并接收鼠标事件
//!         · 返回 Terminal 对象
//!
//!
//!     App:new(site , events)  // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs
//!
//!
//! 主循环本身是同步的；网络请求由运行时的工作线程执行，
//! 结果通过 channel 回到主循环。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use anyhow::{Context, Result};

use backend::{AppConfig, ConfigService, LocalConfigService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let config = load_config()?;

    // 2. 初始化日志（guard 需保留到退出）
    let _log_guard = init_logging()?;
    log::info!("Starting Quote Desk v{}", env!("CARGO_PKG_VERSION"));

    // 3. 应用主题与语言
    view::theme::set_theme(config.theme);
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
        Language::EnUs
    });
    set_language(language);
    log::info!("Language: {}", language.code());

    // 4. 创建运行时与页面
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let (site, events) = backend::create_site(&config.relay, runtime.handle().clone())?;
    let mut app = model::App::new(site, events);

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 关闭对话框任务后停止运行时
    drop(app);
    runtime.shutdown_timeout(Duration::from_secs(1));
    log::info!("Quote Desk exited");

    result
}

/// 读取配置文件并应用环境变量覆盖
///
/// 首次启动时写出一份默认配置，方便用户填写 access key。
fn load_config() -> Result<AppConfig> {
    let service = LocalConfigService::new()?;
    let mut config = service.load()?;

    if !service.path().exists() {
        if let Err(e) = service.save(&config) {
            eprintln!("Could not write default config: {e:#}");
        }
    }

    config.apply_overrides(|name| std::env::var(name).ok());
    Ok(config)
}
