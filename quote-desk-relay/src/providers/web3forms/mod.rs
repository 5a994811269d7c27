//! Web3Forms Relay

mod provider;
mod types;

use reqwest::{Client, Url};

use crate::error::Result;
use crate::providers::common::{create_http_client, parse_endpoint};

pub(crate) use types::Web3FormsResponse;

/// Public Web3Forms submission endpoint.
pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub(crate) const RELAY_ID: &str = "web3forms";

/// Web3Forms Relay
///
/// Posts the field set as `application/x-www-form-urlencoded` to a single
/// endpoint. The access key travels inside the form, not in a header.
pub struct Web3FormsRelay {
    pub(crate) client: Client,
    pub(crate) endpoint: Url,
}

impl Web3FormsRelay {
    /// Build a relay for `endpoint` with a whole-request timeout.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: create_http_client(timeout_secs, RELAY_ID)?,
            endpoint: parse_endpoint(endpoint, RELAY_ID)?,
        })
    }

    /// Endpoint the form is posted to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
