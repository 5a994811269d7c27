//! 通用组件：导航栏、状态栏、对话框

pub mod dialog;
pub mod navigation;
pub mod statusbar;
