//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 终端自己的状态（焦点、导航、页面、滚动）是纯数据；
//! 对话框与提交状态机则来自 quote-desk-core 的 `Site`，
//! 这里只持有它，所有变更仍然通过 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态（四个页面 + 两个动作按钮）
//!         mod page;           // 页面路由状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub scroll: [u16; 4],               // 各页面滚动偏移
//!             pub selected_card: usize,           // 价格页选中的卡片
//!             pub dialog_hint: Option<String>,    // 对话框内的校验提示
//!             pub viewport: Rect,                 // 上一帧的终端区域
//!             pub site: Site,                     // 页头 + 价格区块及其对话框
//!             events: UnboundedReceiver<..>,      // 后台事件
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：model::App::new(site, events)
//!         - 在 update/mod.rs 中修改：app.site.open_free_quote();
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、导航状态（NavigationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         NavigationState {
//!             items: [Home, Solution, Pricing, About, FreeQuote, ContactUs],
//!             selected: usize,
//!         }
//!
//!     前四项切换页面；后两项是页头按钮，Enter 时打开对应的对话框。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、对话框状态
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     对话框没有独立的 Model：`app.site.active_dialog()` 就是当前弹窗。
//!     Site 保证同一时刻最多只有一个对话框打开，并持有页面滚动锁。
//!
//!     数据流：
//!         用户在导航栏选中 "Free Quote" 并按 Enter
//!             ↓
//!         update/navigation.rs 调用 app.site.open_free_quote()
//!             ↓
//!         view/components/dialog.rs 检测到打开的对话框并渲染
//!

mod app;
mod focus;
mod navigation;
mod page;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
