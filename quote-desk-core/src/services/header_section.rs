//! 页头区块：Free Quote / Contact Us 两个对话框

use std::sync::Arc;

use crate::services::{DialogContext, FormDialog};
use crate::types::FormKind;

/// Navigation bar with its two contact dialogs.
#[derive(Debug)]
pub struct HeaderSection {
    pub free_quote: FormDialog,
    pub contact_us: FormDialog,
}

impl HeaderSection {
    pub fn new(ctx: &Arc<DialogContext>) -> Self {
        Self {
            free_quote: FormDialog::new(FormKind::FreeQuote, Arc::clone(ctx)),
            contact_us: FormDialog::new(FormKind::ContactUs, Arc::clone(ctx)),
        }
    }

    pub fn open_free_quote(&mut self) {
        self.free_quote.open(None);
    }

    pub fn open_contact_us(&mut self) {
        self.contact_us.open(None);
    }

    pub fn dialogs(&self) -> [&FormDialog; 2] {
        [&self.free_quote, &self.contact_us]
    }

    pub fn dialogs_mut(&mut self) -> [&mut FormDialog; 2] {
        [&mut self.free_quote, &mut self.contact_us]
    }
}
