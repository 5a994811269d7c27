//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **对话框外壳归 `dialog.*`**：按钮与提示；标题和反馈文案由核心库提供，始终为英文
//! 3. **页面内容归对应页面**：如 `home.*`, `pricing.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 首页（Hero）文本
    pub home: HomeTexts,
    /// 解决方案页文本
    pub solution: SolutionTexts,
    /// 价格页文本
    pub pricing: PricingTexts,
    /// 关于页文本
    pub about: AboutTexts,
    /// 对话框外壳文本
    pub dialog: DialogTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub submit: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub shift_tab: &'static str,
    pub ctrl_x: &'static str,
    pub alt_q: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub scroll: &'static str,
    pub pick_card: &'static str,
    pub request_quote: &'static str,
    pub next_field: &'static str,
    pub prev_field: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub solution: &'static str,
    pub pricing: &'static str,
    pub about: &'static str,
    pub free_quote: &'static str,
    pub contact_us: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

/// 首页文本
pub struct HomeTexts {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub body: &'static str,
    pub products_label: &'static str,
    pub products: &'static [&'static str],
    pub call_to_action: &'static str,
}

/// 解决方案卡片
pub struct FeatureCard {
    pub emoji: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// 解决方案页文本
pub struct SolutionTexts {
    pub heading: &'static str,
    pub intro: &'static str,
    pub cards: [FeatureCard; 3],
}

/// 价格页文本
pub struct PricingTexts {
    pub heading: &'static str,
    pub request_quote: &'static str,
    pub popular: &'static str,
}

/// 关于页文本
pub struct AboutTexts {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

// ============================================================================
// 对话框
// ============================================================================

/// 对话框外壳文本
pub struct DialogTexts {
    pub required_marker: &'static str,
    pub submitting: &'static str,
    pub closing_soon: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub scroll_locked: &'static str,
}
