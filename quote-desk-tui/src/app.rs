//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Home , Solution , Pricing , About , Free Quote , Contact Us],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Home,                      // 当前应该显示哪个页面，默认为 Home
//!     status_message = None,                          // 状态栏消息
//!     site: Site,                                     // 页头 / 价格区块及其对话框（全部关闭）
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Some(e) = app.next_event() {          // 先应用后台事件（中转应答、自动关闭）
//!         update::update(&mut app , Background(e))
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI，记录终端区域供鼠标命中测试
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!                                                     // 若用户按键，返回 Some(Event::Key(...))，否则为 None
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }
//!
//! 提交请求在 tokio 运行时的工作线程上执行，主循环本身从不阻塞等待网络。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 应用已到达的后台事件
        while let Some(background) = app.next_event() {
            update::update(app, AppMessage::Background(background));
        }

        // 2. 渲染 UI
        let completed = terminal.draw(|frame| {
            view::render(app, frame);
        })?;
        app.viewport = completed.area;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
