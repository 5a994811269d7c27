//! 主题
//!
//! 两套配色对应站点的深色 / 浅色外观，品牌色为 L&SD 的深蓝与琥珀色。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static LIGHT_THEME: AtomicBool = AtomicBool::new(false);

/// 配置文件中的主题名（`dark` / `light`）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 切换全局主题
pub fn set_theme(theme: Theme) {
    LIGHT_THEME.store(theme == Theme::Light, Ordering::Relaxed);
}

/// 当前主题的配色
pub fn colors() -> &'static Palette {
    if LIGHT_THEME.load(Ordering::Relaxed) {
        &Palette::LIGHT
    } else {
        &Palette::DARK
    }
}

/// 配色表
#[derive(Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 品牌主色：标题栏、按钮、选中项
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 品牌辅色：快捷键提示
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub dialog_bg: Color,
    /// 遮罩层下被压暗的页面文字
    pub backdrop: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        bg: Color::Rgb(15, 23, 42),
        fg: Color::Rgb(226, 232, 240),
        muted: Color::Rgb(148, 163, 184),
        border: Color::Rgb(51, 65, 85),
        border_focused: Color::Rgb(59, 130, 246),
        highlight: Color::Rgb(37, 99, 235),
        selected_bg: Color::Rgb(30, 64, 175),
        selected_fg: Color::White,
        accent: Color::Rgb(251, 191, 36),
        success: Color::Rgb(74, 222, 128),
        warning: Color::Rgb(251, 146, 60),
        error: Color::Rgb(248, 113, 113),
        dialog_bg: Color::Rgb(30, 41, 59),
        backdrop: Color::Rgb(71, 85, 105),
    };

    pub const LIGHT: Self = Self {
        bg: Color::Rgb(248, 250, 252),
        fg: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        border: Color::Rgb(203, 213, 225),
        border_focused: Color::Rgb(37, 99, 235),
        highlight: Color::Rgb(29, 78, 216),
        selected_bg: Color::Rgb(219, 234, 254),
        selected_fg: Color::Rgb(15, 23, 42),
        accent: Color::Rgb(180, 83, 9),
        success: Color::Rgb(21, 128, 61),
        warning: Color::Rgb(194, 65, 12),
        error: Color::Rgb(185, 28, 28),
        dialog_bg: Color::White,
        backdrop: Color::Rgb(203, 213, 225),
    };

    /// 状态栏
    pub fn statusbar(&self) -> Style {
        Style::default().bg(self.highlight).fg(Color::White)
    }

    /// 状态栏中的快捷键
    pub fn hint_key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// 状态栏中的快捷键说明
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(Color::Rgb(224, 231, 255))
    }
}

