//! 英文翻译 (en-US)

use super::keys::{
    AboutTexts, ActionTexts, CommonTexts, DialogTexts, FeatureCard, HintTexts, HomeTexts,
    KeyNames, NavTexts, PricingTexts, SolutionTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "L&SD Quote Desk",
        cancel: "Cancel",
        submit: "Submit",
        quit: "Quit",
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
            switch_panel: "Switch Panels",
            navigate: "Navigate",
            open: "Open",
            scroll: "Scroll",
            pick_card: "Pick Card",
            request_quote: "Request a Quote",
            next_field: "Next Field",
            prev_field: "Prev Field",
            submit: "Submit",
            cancel: "Cancel",
            close: "Close",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        solution: "Solution",
        pricing: "Pricing",
        about: "About",
        free_quote: "Free Quote",
        contact_us: "Contact Us",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    home: HomeTexts {
        headline: "L&SD",
        tagline: "office supplies, computers, services, and enterprises",
        body: "Reliable hardware, everyday essentials and hands-on support for growing businesses.",
        products_label: "Our Products",
        products: &["HP", "Intel", "Canon", "Asus", "AMD"],
        call_to_action: "Open \"Free Quote\" or \"Contact Us\" from the menu to reach our team.",
    },

    solution: SolutionTexts {
        heading: "Solutions Tailored for Your Business",
        intro: "At L&SD, we provide comprehensive solutions encompassing reliable computers, essential office supplies, and expert repair services to empower and streamline your business operations.",
        cards: [
            FeatureCard {
                emoji: "💻",
                title: "High-Performance Computers",
                body: "Our selection of cutting-edge computers is designed for durability and performance, giving your team the power to excel without interruptions.",
            },
            FeatureCard {
                emoji: "🗂️",
                title: "Complete Office Supplies",
                body: "We stock a wide variety of essential office supplies, from stationery to peripherals, ensuring your workplace runs efficiently and smoothly day-to-day.",
            },
            FeatureCard {
                emoji: "🛠️",
                title: "Expert Repair & Support",
                body: "Our skilled technicians provide quick, reliable repair and maintenance services to minimize downtime and keep your systems running at peak efficiency.",
            },
        ],
    },

    pricing: PricingTexts {
        heading: "🏷️ Pricing Categories",
        request_quote: "Request a Quote",
        popular: "Popular",
    },

    about: AboutTexts {
        heading: "About L&SD",
        paragraphs: &[
            "L&SD supplies businesses with computers, office supplies and the services that keep them running.",
            "Tell us what your organization needs and we will get back to you with a tailored quote.",
        ],
    },

    // ========================================================================
    // 对话框
    // ========================================================================
    dialog: DialogTexts {
        required_marker: "*",
        submitting: "Submitting...",
        closing_soon: "This window will close shortly.",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        scroll_locked: "Page scroll locked",
    },
};
