//! 简体中文翻译 (zh-CN)

use super::keys::{
    AboutTexts, ActionTexts, CommonTexts, DialogTexts, FeatureCard, HintTexts, HomeTexts,
    KeyNames, NavTexts, PricingTexts, SolutionTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "L&SD 报价台",
        cancel: "取消",
        submit: "提交",
        quit: "退出",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            shift_tab: "Shift+Tab",
            ctrl_x: "Ctrl+X",
            alt_q: "Alt+q",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            navigate: "导航",
            open: "打开",
            scroll: "滚动",
            pick_card: "选择卡片",
            request_quote: "申请报价",
            next_field: "下一项",
            prev_field: "上一项",
            submit: "提交",
            cancel: "取消",
            close: "关闭",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        home: "首页",
        solution: "解决方案",
        pricing: "价格",
        about: "关于",
        free_quote: "免费报价",
        contact_us: "联系我们",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    home: HomeTexts {
        headline: "L&SD",
        tagline: "办公用品、电脑、服务与企业方案",
        body: "为成长中的企业提供可靠的硬件、日常办公用品和上门技术支持。",
        products_label: "合作品牌",
        products: &["HP", "Intel", "Canon", "Asus", "AMD"],
        call_to_action: "在菜单中打开「免费报价」或「联系我们」即可联系我们的团队。",
    },

    solution: SolutionTexts {
        heading: "为您的企业量身定制的解决方案",
        intro: "L&SD 提供涵盖可靠电脑、必备办公用品和专业维修服务的完整方案，助力并简化您的业务运营。",
        cards: [
            FeatureCard {
                emoji: "💻",
                title: "高性能电脑",
                body: "精选耐用、高性能的电脑，让您的团队全力以赴、不受打扰。",
            },
            FeatureCard {
                emoji: "🗂️",
                title: "齐全的办公用品",
                body: "从文具到外设，我们备有各类必备办公用品，确保工作场所日常高效运转。",
            },
            FeatureCard {
                emoji: "🛠️",
                title: "专业维修与支持",
                body: "经验丰富的技术人员提供快速可靠的维修与保养服务，减少停机时间，让系统保持最佳状态。",
            },
        ],
    },

    pricing: PricingTexts {
        heading: "🏷️ 价格分类",
        request_quote: "申请报价",
        popular: "热门",
    },

    about: AboutTexts {
        heading: "关于 L&SD",
        paragraphs: &[
            "L&SD 为企业提供电脑、办公用品以及保障业务运转的各项服务。",
            "告诉我们您的需求，我们会为您提供量身定制的报价。",
        ],
    },

    // ========================================================================
    // 对话框
    // ========================================================================
    dialog: DialogTexts {
        required_marker: "*",
        submitting: "提交中...",
        closing_soon: "窗口即将自动关闭。",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "就绪",
        scroll_locked: "页面滚动已锁定",
    },
};
