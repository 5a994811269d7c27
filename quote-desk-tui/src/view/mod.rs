//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都从头渲染：`app.rs` 中的 `terminal.draw(|f| view::render(app, f))`。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         pub mod components;     // 导航栏、状态栏、对话框
//!         pub mod pages;          // Home / Solution / Pricing / About
//!         pub mod theme;          // 颜色与样式
//!
//!
//!     绘制顺序：
//!         1. 标题栏
//!         2. 左侧导航面板
//!         3. 右侧页面内容（按 app.current_page 分发）
//!         4. 底部状态栏
//!         5. 对话框（最上层）：先压暗整个屏幕作为遮罩，再用 Clear 清出面板
//!
//!     对话框面板的位置由 components::dialog::panel_rect 计算，
//!     Update 层用同一个函数判断鼠标点击是落在遮罩层还是面板内。
//!

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
