//! 导航状态定义

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Solution,
    Pricing,
    About,
    /// 页头 "Free Quote" 按钮
    FreeQuote,
    /// 页头 "Contact Us" 按钮
    ContactUs,
}

impl NavItemId {
    /// 是否为打开对话框的动作按钮（而非页面）
    pub fn is_action(self) -> bool {
        matches!(self, NavItemId::FreeQuote | NavItemId::ContactUs)
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Solution,
                    icon: "◆",
                },
                NavItem {
                    id: NavItemId::Pricing,
                    icon: "$",
                },
                NavItem {
                    id: NavItemId::About,
                    icon: "i",
                },
                NavItem {
                    id: NavItemId::FreeQuote,
                    icon: "✉",
                },
                NavItem {
                    id: NavItemId::ContactUs,
                    icon: "☎",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.selected, 0);

        for _ in 0..20 {
            nav.select_next();
        }
        assert_eq!(nav.current_id(), Some(NavItemId::ContactUs));
    }

    #[test]
    fn action_items_are_last() {
        let nav = NavigationState::new();
        let first_action = nav.items.iter().position(|item| item.id.is_action());
        assert_eq!(first_action, Some(4));
    }
}
