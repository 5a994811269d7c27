use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Field Set ============

/// Fixed metadata attached to every submission.
///
/// None of these values are user-editable; each call site sends them verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMetadata {
    /// Token identifying the sender account at the relay.
    pub access_key: String,
    /// Human-readable request label (differs per call site).
    pub subject: String,
    /// Destination address, sent as `to`.
    pub recipient: String,
    /// Sender label, sent as `from_name`.
    pub sender_label: String,
    /// Selected pricing category (quote-request dialogs only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl std::fmt::Debug for FormMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormMetadata")
            .field("access_key", &mask_secret(&self.access_key))
            .field("subject", &self.subject)
            .field("recipient", &self.recipient)
            .field("sender_label", &self.sender_label)
            .field("category", &self.category)
            .finish()
    }
}

/// Values the visitor typed into the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    /// Optional contact number; omitted from the payload when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// The complete set of values sent in one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub metadata: FormMetadata,
    pub fields: ContactFields,
}

impl FieldSet {
    pub fn new(metadata: FormMetadata, fields: ContactFields) -> Self {
        Self { metadata, fields }
    }

    /// Flatten into the ordered `(name, value)` pairs posted to the relay.
    ///
    /// Metadata first, then user fields; `phone` and `category` only appear
    /// when present.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let m = &self.metadata;
        let u = &self.fields;

        let mut pairs = vec![
            ("access_key", m.access_key.clone()),
            ("subject", m.subject.clone()),
            ("to", m.recipient.clone()),
            ("from_name", m.sender_label.clone()),
        ];
        if let Some(category) = &m.category {
            pairs.push(("category", category.clone()));
        }

        pairs.push(("name", u.name.clone()));
        pairs.push(("email", u.email.clone()));
        if let Some(phone) = &u.phone {
            pairs.push(("phone", phone.clone()));
        }
        pairs.push(("message", u.message.clone()));

        pairs
    }

    /// Look up a posted value by its wire name.
    pub fn get(&self, name: &str) -> Option<String> {
        self.to_pairs()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

// ============ Relay Settings ============

/// Relay implementations known to this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayKind {
    #[default]
    Web3forms,
}

impl RelayKind {
    /// Stable identifier used in log lines and error values.
    pub fn id(self) -> &'static str {
        match self {
            Self::Web3forms => "web3forms",
        }
    }
}

/// Connection settings used by [`create_relay`](crate::create_relay).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaySettings {
    pub kind: RelayKind,
    /// Absolute URL the form is posted to.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl RelaySettings {
    /// Default settings for the public Web3Forms endpoint.
    #[cfg(feature = "web3forms")]
    pub fn web3forms() -> Self {
        Self {
            kind: RelayKind::Web3forms,
            endpoint: crate::providers::WEB3FORMS_ENDPOINT.to_string(),
            timeout_secs: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(category: Option<&str>, phone: Option<&str>) -> FieldSet {
        FieldSet::new(
            FormMetadata {
                access_key: "6138b91e-9848-49c9-bc70-422424d62dc2".to_string(),
                subject: "Quote Request: Computers".to_string(),
                recipient: "sales@example.com".to_string(),
                sender_label: "L&SD Website".to_string(),
                category: category.map(str::to_string),
            },
            ContactFields {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                phone: phone.map(str::to_string),
                message: "Need 5 laptops".to_string(),
            },
        )
    }

    #[test]
    fn pairs_use_wire_names() {
        let keys: Vec<_> = sample(Some("Computers"), Some("+1 234"))
            .to_pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            [
                "access_key",
                "subject",
                "to",
                "from_name",
                "category",
                "name",
                "email",
                "phone",
                "message"
            ]
        );
    }

    #[test]
    fn optional_pairs_are_omitted() {
        let set = sample(None, None);
        assert!(set.get("category").is_none());
        assert!(set.get("phone").is_none());
        assert_eq!(set.get("to").as_deref(), Some("sales@example.com"));
    }

    #[test]
    fn debug_masks_access_key() {
        let rendered = format!("{:?}", sample(None, None));
        assert!(!rendered.contains("422424d62dc2"));
        assert!(rendered.contains("Jane"));
    }
}
