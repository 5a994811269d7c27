//! Form relay implementations

/// Shared utilities used by relay implementations.
pub mod common;

#[cfg(feature = "web3forms")]
mod web3forms;

#[cfg(feature = "web3forms")]
pub use web3forms::{WEB3FORMS_ENDPOINT, Web3FormsRelay};
