//! # quote-desk-relay
//!
//! Outbound client for the third-party form relay that turns a posted
//! field set into an e-mail for the L&SD sales inbox.
//!
//! ## Supported Relays
//!
//! | Relay | Feature Flag | Auth Method |
//! |-------|-------------|-------------|
//! | [Web3Forms](https://web3forms.com/) | `web3forms` | `access_key` form field |
//!
//! ## Feature Flags
//!
//! - **`web3forms`** *(default)* - Enable the Web3Forms relay.
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quote_desk_relay::{create_relay, ContactFields, FieldSet, FormMetadata, RelaySettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let relay = create_relay(&RelaySettings::web3forms())?;
//!
//!     let fields = FieldSet::new(
//!         FormMetadata {
//!             access_key: "your-access-key".to_string(),
//!             subject: "Quote Request: Computers".to_string(),
//!             recipient: "sales@example.com".to_string(),
//!             sender_label: "L&SD Website".to_string(),
//!             category: Some("Computers".to_string()),
//!         },
//!         ContactFields {
//!             name: "Jane".to_string(),
//!             email: "jane@example.com".to_string(),
//!             phone: None,
//!             message: "Need 5 laptops".to_string(),
//!         },
//!     );
//!
//!     relay.submit(&fields).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every relay call returns [`Result<(), RelayError>`](RelayError). Only the
//! HTTP status decides success: any 2xx is `Ok(())`, everything else is an
//! error. Relays never retry; a failed submission needs a new user action.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{RelayError, Result};

// Re-export factory functions
pub use factory::create_relay;

// Re-export core trait
pub use traits::FormRelay;

// Re-export types
pub use types::{ContactFields, FieldSet, FormMetadata, RelayKind, RelaySettings};

// Re-export utils module
pub use utils::log_sanitizer;

// Re-export concrete relays (behind feature flags)
#[cfg(feature = "web3forms")]
pub use providers::{WEB3FORMS_ENDPOINT, Web3FormsRelay};
