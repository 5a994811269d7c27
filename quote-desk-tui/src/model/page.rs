//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
///
/// 对应站点的四个区块；对话框不是页面，由 `Site` 管理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（Hero）
    #[default]
    Home,
    /// 解决方案
    Solution,
    /// 价格分类
    Pricing,
    /// 关于我们
    About,
}

impl Page {
    /// 获取页面标题（当前语言）
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Home => texts.nav.home,
            Page::Solution => texts.nav.solution,
            Page::Pricing => texts.nav.pricing,
            Page::About => texts.nav.about,
        }
    }

    /// 页面在滚动偏移表中的下标
    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Solution => 1,
            Page::Pricing => 2,
            Page::About => 3,
        }
    }
}
