//! Generic HTTP client tools
//!
//! Reusable request processing shared by every relay implementation.
//! Each relay builds its own `RequestBuilder` (URL, headers, body) and hands
//! it over for sending, logging and reading the response.
//!
//! # design principles
//! - **Exactly one attempt** - a failed submission is reported, never retried
//! - **Status first** - callers decide success from the status code alone
//! - **Opportunistic parsing** - the body is read for logging, parsing is optional

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::RelayError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `relay_name` - relay identifier (for logging)
    /// * `method_name` - request method name (such as "POST", used for logs)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any HTTP answer other than 429
    /// * `Err(RelayError::RateLimited)` - HTTP 429
    /// * `Err(RelayError::Timeout | RelayError::NetworkError)` - no usable answer
    pub async fn execute_request(
        request_builder: RequestBuilder,
        relay_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), RelayError> {
        log::debug!("[{relay_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::Timeout {
                    relay: relay_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                RelayError::NetworkError {
                    relay: relay_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{relay_name}] Response Status: {status_code}");

        // Retry-After 需在读取 body 之前取出
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{relay_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(RelayError::RateLimited {
                relay: relay_name.to_string(),
                retry_after,
                raw_message: Some(truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| RelayError::NetworkError {
                relay: relay_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{relay_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body
    ///
    /// Returns `None` (and logs at debug level) when the body is not the
    /// expected JSON; relay answers are never required to be parseable.
    pub fn parse_json<T>(response_text: &str, relay_name: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match serde_json::from_str(response_text) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!(
                    "[{relay_name}] Response is not JSON ({e}): {}",
                    truncate_for_log(response_text)
                );
                None
            }
        }
    }

    /// Whether a status code counts as a successful submission.
    pub fn is_success(status_code: u16) -> bool {
        (200..300).contains(&status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpUtils::is_success(200));
        assert!(HttpUtils::is_success(204));
        assert!(HttpUtils::is_success(299));
        assert!(!HttpUtils::is_success(199));
        assert!(!HttpUtils::is_success(301));
        assert!(!HttpUtils::is_success(500));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Option<Foo> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert_eq!(result, Some(Foo { x: 42 }));
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Option<Foo> = HttpUtils::parse_json("<html>bad gateway</html>", "test");
        assert!(result.is_none());
    }
}
