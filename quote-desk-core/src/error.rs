//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::{FormField, SubmissionState};

// Re-export library error type
pub use quote_desk_relay::RelayError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A required input is empty
    #[error("Please fill in the {0} field")]
    MissingField(FormField),

    /// The e-mail input does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Inputs are disabled while submitting or after success
    #[error("Form inputs are locked")]
    InputLocked,

    /// Operation not allowed from the current submission state
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: SubmissionState,
        action: &'static str,
    },

    /// Operation needs an open dialog
    #[error("Dialog is not open")]
    DialogClosed,

    /// No pricing card with that name
    #[error("Unknown pricing category: {0}")]
    UnknownCategory(String),

    /// Relay error (converting from library)
    #[error("{0}")]
    Relay(#[from] RelayError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, relay refusal, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingField(_)
            | Self::InvalidEmail(_)
            | Self::InputLocked
            | Self::InvalidTransition { .. }
            | Self::DialogClosed
            | Self::UnknownCategory(_) => true,
            Self::Relay(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
