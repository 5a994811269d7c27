//! 表单提交生命周期

mod machine;
mod timer;

pub use machine::SubmissionMachine;
pub use timer::{AUTO_DISMISS_DELAY, DismissTimer};
