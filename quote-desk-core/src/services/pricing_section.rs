//! 价格区块：分类卡片 + 报价请求对话框

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{DialogContext, FormDialog};
use crate::types::{FormKind, PricingCategory, default_catalog};

/// Pricing cards and the shared quote-request dialog.
#[derive(Debug)]
pub struct PricingSection {
    catalog: Vec<PricingCategory>,
    selected_category: Option<String>,
    pub dialog: FormDialog,
}

impl PricingSection {
    pub fn new(ctx: &Arc<DialogContext>) -> Self {
        Self::with_catalog(ctx, default_catalog())
    }

    pub fn with_catalog(ctx: &Arc<DialogContext>, catalog: Vec<PricingCategory>) -> Self {
        Self {
            catalog,
            selected_category: None,
            dialog: FormDialog::new(FormKind::QuoteRequest, Arc::clone(ctx)),
        }
    }

    pub fn catalog(&self) -> &[PricingCategory] {
        &self.catalog
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// "Request a Quote" on the card named `name`.
    pub fn request_quote(&mut self, name: &str) -> CoreResult<()> {
        let category = self
            .catalog
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CoreError::UnknownCategory(name.to_string()))?;

        self.selected_category = Some(category.name.clone());
        self.dialog.open(self.selected_category.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockRelay, create_test_context};

    #[tokio::test]
    async fn request_quote_sets_category_and_title() {
        let (ctx, _rx) = create_test_context(MockRelay::succeeding());
        let mut pricing = PricingSection::new(&ctx);

        pricing.request_quote("Office Supplies").unwrap();
        assert_eq!(pricing.selected_category(), Some("Office Supplies"));
        assert_eq!(pricing.dialog.title(), "Request a Quote: Office Supplies");
        assert!(pricing.dialog.is_open());
    }

    #[tokio::test]
    async fn unknown_category_leaves_dialog_closed() {
        let (ctx, _rx) = create_test_context(MockRelay::succeeding());
        let mut pricing = PricingSection::new(&ctx);

        let err = pricing.request_quote("Toys").unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(ref n) if n == "Toys"));
        assert!(!pricing.dialog.is_open());
        assert!(pricing.selected_category().is_none());
    }
}
