//! Web3Forms FormRelay trait 实现

use async_trait::async_trait;

use crate::error::{RelayError, Result};
use crate::http_client::HttpUtils;
use crate::traits::FormRelay;
use crate::types::FieldSet;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{RELAY_ID, Web3FormsRelay, Web3FormsResponse};

impl Web3FormsRelay {
    /// 从响应体中提取可读的错误信息
    pub(crate) fn rejection_message(body: &str) -> Option<String> {
        match HttpUtils::parse_json::<Web3FormsResponse>(body, RELAY_ID) {
            Some(Web3FormsResponse {
                message: Some(msg), ..
            }) if !msg.is_empty() => Some(msg),
            Some(_) => None,
            None if body.trim().is_empty() => None,
            None => Some(truncate_for_log(body.trim())),
        }
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    fn id(&self) -> &'static str {
        RELAY_ID
    }

    async fn submit(&self, fields: &FieldSet) -> Result<()> {
        let url = self.endpoint.as_str();
        let request = self
            .client
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .form(&fields.to_pairs());

        let (status, body) = HttpUtils::execute_request(request, RELAY_ID, "POST", url).await?;

        if HttpUtils::is_success(status) {
            if let Some(resp) = HttpUtils::parse_json::<Web3FormsResponse>(&body, RELAY_ID) {
                log::debug!(
                    "[{RELAY_ID}] Accepted: success={}, message={:?}",
                    resp.success,
                    resp.message
                );
            }
            return Ok(());
        }

        Err(RelayError::Rejected {
            relay: RELAY_ID.to_string(),
            status,
            raw_message: Self::rejection_message(&body),
        })
    }
}
