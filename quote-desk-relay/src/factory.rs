//! Relay factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::FormRelay;
use crate::types::{RelayKind, RelaySettings};

#[cfg(feature = "web3forms")]
use crate::providers::Web3FormsRelay;

/// Creates a [`FormRelay`] instance from the given settings.
///
/// The concrete relay type is determined by [`RelayKind`]. The endpoint is
/// validated here, so a bad URL surfaces as
/// [`RelayError::InvalidConfig`](crate::RelayError::InvalidConfig) before
/// any form is ever posted.
///
/// # Examples
///
/// ```rust,no_run
/// use quote_desk_relay::{create_relay, RelaySettings};
///
/// let relay = create_relay(&RelaySettings::web3forms()).unwrap();
/// assert_eq!(relay.id(), "web3forms");
/// ```
pub fn create_relay(settings: &RelaySettings) -> Result<Arc<dyn FormRelay>> {
    match settings.kind {
        #[cfg(feature = "web3forms")]
        RelayKind::Web3forms => Ok(Arc::new(Web3FormsRelay::new(
            &settings.endpoint,
            settings.timeout_secs,
        )?)),
        #[cfg(not(feature = "web3forms"))]
        kind => Err(crate::error::RelayError::InvalidConfig {
            relay: kind.id().to_string(),
            detail: "relay support not compiled in".to_string(),
        }),
    }
}
