//! Pricing catalog

use serde::{Deserialize, Serialize};

/// One card in the pricing section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCategory {
    pub name: String,
    pub price_info: String,
    pub description: String,
    pub emoji: String,
    #[serde(default)]
    pub popular: bool,
}

impl PricingCategory {
    fn new(name: &str, emoji: &str, price_info: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price_info: price_info.to_string(),
            description: description.to_string(),
            emoji: emoji.to_string(),
            popular: false,
        }
    }
}

/// Categories shown on the pricing page.
pub fn default_catalog() -> Vec<PricingCategory> {
    vec![
        PricingCategory::new(
            "Computers",
            "💻",
            "Custom quotes based on your business needs",
            "High-performance desktops, laptops, and accessories tailored to your organization's requirements.",
        ),
        PricingCategory::new(
            "Office Supplies",
            "📦",
            "Flexible pricing – Ask for a personalized quote",
            "A wide range of essential office supplies to keep your workplace efficiently stocked.",
        ),
        PricingCategory::new(
            "Services",
            "🛠️",
            "Contact us for repair, maintenance or setup service quotes",
            "Expert repair, maintenance, and IT support services to minimize downtime and keep your operations running.",
        ),
    ]
}
