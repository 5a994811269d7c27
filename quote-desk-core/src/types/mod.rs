//! 类型定义模块

mod catalog;
mod form;
mod submission;

pub use catalog::{PricingCategory, default_catalog};
pub use form::{ERROR_MESSAGE, FormDraft, FormField, FormKind, SenderIdentity};
pub use submission::{Resolution, SubmissionState, SubmissionTicket};

// Re-export relay 库的公共类型
pub use quote_desk_relay::{ContactFields, FieldSet, FormMetadata};
