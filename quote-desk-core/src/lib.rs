//! Quote Desk Core Library
//!
//! Dialog and form-submission logic behind the L&SD contact and quote forms:
//! - Dialog lifecycle (open/close, Escape, backdrop click, scroll lock)
//! - Submission state machine (idle → submitting → success/error)
//! - Page sections owning their dialogs (header, pricing)
//!
//! The library is front-end agnostic: the relay is injected as
//! `Arc<dyn FormRelay>` and background results come back over a channel,
//! so any event loop can drive it.

pub mod dialog;
pub mod error;
pub mod services;
pub mod submission;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use dialog::{ClickTarget, DialogController, DialogId, DialogView, KeyListeners, ScrollLock};
pub use error::{CoreError, CoreResult};
pub use services::{
    DialogContext, DialogEvent, Feedback, FormDialog, HeaderSection, PricingSection, Site,
};
pub use submission::{AUTO_DISMISS_DELAY, DismissTimer, SubmissionMachine};
