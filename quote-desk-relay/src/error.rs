use serde::{Deserialize, Serialize};

/// Unified error type for all form relay operations.
///
/// Each variant includes a `relay` field identifying which relay produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// The dialogs treat every variant the same way (the submission ends in the
/// `error` state); the variants exist for logging and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RelayError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Relay that produced the error.
        relay: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Relay that produced the error.
        relay: String,
        /// Error details.
        detail: String,
    },

    /// The relay answered HTTP 429.
    RateLimited {
        /// Relay that produced the error.
        relay: String,
        /// Suggested wait time in seconds, if provided by the relay.
        retry_after: Option<u64>,
        /// Original response body, if available.
        raw_message: Option<String>,
    },

    /// The relay answered with a non-2xx status.
    Rejected {
        /// Relay that produced the error.
        relay: String,
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        raw_message: Option<String>,
    },

    /// The relay settings are unusable (bad endpoint URL, client build failure).
    InvalidConfig {
        /// Relay that produced the error.
        relay: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl RelayError {
    /// 是否为预期行为（对方拒绝、限流等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::RateLimited { .. })
    }

    /// Identifier of the relay that produced the error.
    #[must_use]
    pub fn relay(&self) -> &str {
        match self {
            Self::NetworkError { relay, .. }
            | Self::Timeout { relay, .. }
            | Self::RateLimited { relay, .. }
            | Self::Rejected { relay, .. }
            | Self::InvalidConfig { relay, .. } => relay,
        }
    }
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { relay, detail } => {
                write!(f, "[{relay}] Network error: {detail}")
            }
            Self::Timeout { relay, detail } => {
                write!(f, "[{relay}] Request timeout: {detail}")
            }
            Self::RateLimited {
                relay, retry_after, ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{relay}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{relay}] Rate limited")
                }
            }
            Self::Rejected {
                relay,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{relay}] Rejected with HTTP {status}: {msg}")
                } else {
                    write!(f, "[{relay}] Rejected with HTTP {status}")
                }
            }
            Self::InvalidConfig { relay, detail } => {
                write!(f, "[{relay}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for RelayError {}

/// Convenience type alias for `Result<T, RelayError>`.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = RelayError::NetworkError {
            relay: "web3forms".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[web3forms] Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = RelayError::RateLimited {
            relay: "web3forms".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[web3forms] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_rejected_with_message() {
        let e = RelayError::Rejected {
            relay: "web3forms".to_string(),
            status: 400,
            raw_message: Some("Invalid access key".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[web3forms] Rejected with HTTP 400: Invalid access key"
        );
    }

    #[test]
    fn display_rejected_without_message() {
        let e = RelayError::Rejected {
            relay: "web3forms".to_string(),
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[web3forms] Rejected with HTTP 500");
    }

    #[test]
    fn display_invalid_config() {
        let e = RelayError::InvalidConfig {
            relay: "web3forms".to_string(),
            detail: "relative URL without a base".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[web3forms] Invalid configuration: relative URL without a base"
        );
    }

    #[test]
    fn expected_errors_are_relay_answers() {
        let rejected = RelayError::Rejected {
            relay: "t".into(),
            status: 500,
            raw_message: None,
        };
        let timeout = RelayError::Timeout {
            relay: "t".into(),
            detail: "15s elapsed".into(),
        };
        assert!(rejected.is_expected());
        assert!(!timeout.is_expected());
        assert_eq!(timeout.relay(), "t");
    }

    #[test]
    fn serialize_json_carries_code_tag() {
        let e = RelayError::Rejected {
            relay: "web3forms".to_string(),
            status: 500,
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Rejected\""));
        assert!(json.contains("\"status\":500"));
    }
}
