//! Form profiles and editable drafts

use std::fmt;

use quote_desk_relay::{ContactFields, FieldSet, FormMetadata};
use serde::{Deserialize, Serialize};

/// Feedback shown after any failed submission.
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

/// Editable input of a contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// Tab order inside the dialog.
    pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// Everything except the contact number must be filled in.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Contact Number",
            Self::Message => "Message",
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Phone => Some("+1 234 567 8900"),
            _ => None,
        }
    }

    /// Next field in tab order (wraps).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order (wraps).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three places a contact dialog can be opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    /// Header "Free Quote" button.
    FreeQuote,
    /// Header "Contact Us" button.
    ContactUs,
    /// Pricing card "Request a Quote" button.
    QuoteRequest,
}

impl FormKind {
    /// Dialog heading. Quote requests name their category.
    pub fn title(self, category: Option<&str>) -> String {
        match self {
            Self::FreeQuote => "L&SD Contact Form - Free Quote".to_string(),
            Self::ContactUs => "L&SD Contact Form - Contact Us".to_string(),
            Self::QuoteRequest => format!("Request a Quote: {}", category.unwrap_or_default()),
        }
    }

    /// `subject` field sent to the relay.
    pub fn subject(self, category: Option<&str>) -> String {
        match self {
            Self::FreeQuote => "L&SD Contact Form - Free Quote Request".to_string(),
            Self::ContactUs => "L&SD Contact Form - Contact Us Inquiry".to_string(),
            Self::QuoteRequest => format!("Quote Request: {}", category.unwrap_or_default()),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::FreeQuote => "Thank you! Your Free Quote request has been sent.",
            Self::ContactUs => "Thank you! Your message has been sent.",
            Self::QuoteRequest => "Thank you! Your quote request has been sent.",
        }
    }

    pub fn error_message(self) -> &'static str {
        ERROR_MESSAGE
    }

    /// Only quote requests attach a `category` field.
    pub fn carries_category(self) -> bool {
        matches!(self, Self::QuoteRequest)
    }
}

/// Fixed sender metadata shared by every dialog.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderIdentity {
    pub access_key: String,
    pub recipient: String,
    pub sender_label: String,
}

impl fmt::Debug for SenderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SenderIdentity")
            .field(
                "access_key",
                &quote_desk_relay::log_sanitizer::mask_secret(&self.access_key),
            )
            .field("recipient", &self.recipient)
            .field("sender_label", &self.sender_label)
            .finish()
    }
}

impl SenderIdentity {
    /// Metadata block for one submission of `kind`.
    pub fn metadata(&self, kind: FormKind, category: Option<&str>) -> FormMetadata {
        FormMetadata {
            access_key: self.access_key.clone(),
            subject: kind.subject(category),
            recipient: self.recipient.clone(),
            sender_label: self.sender_label.clone(),
            category: if kind.carries_category() {
                category.map(str::to_string)
            } else {
                None
            },
        }
    }
}

/// Values typed into one dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.slot(field).push(c);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.slot(field).pop();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required fields that are empty or whitespace only, in tab order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Minimal address shape check: `local@domain` with a dot in the domain.
    pub fn email_is_plausible(&self) -> bool {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && domain.contains('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        }
    }

    /// User half of the field set. An empty phone is left out.
    pub fn to_contact_fields(&self) -> ContactFields {
        let phone = self.phone.trim();
        ContactFields {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.clone(),
        }
    }

    /// Complete field set for `kind`.
    pub fn to_field_set(
        &self,
        sender: &SenderIdentity,
        kind: FormKind,
        category: Option<&str>,
    ) -> FieldSet {
        FieldSet::new(sender.metadata(kind, category), self.to_contact_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> SenderIdentity {
        SenderIdentity {
            access_key: "key-1234".to_string(),
            recipient: "notonce50@gmail.com".to_string(),
            sender_label: "L&SD Website".to_string(),
        }
    }

    #[test]
    fn test_phone_is_the_only_optional_field() {
        let required: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(
            required,
            vec![FormField::Name, FormField::Email, FormField::Message]
        );
    }

    #[test]
    fn test_tab_order_wraps() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
        assert_eq!(FormField::Email.next(), FormField::Phone);
    }

    #[test]
    fn test_kind_copy() {
        assert_eq!(
            FormKind::QuoteRequest.title(Some("Computers")),
            "Request a Quote: Computers"
        );
        assert_eq!(
            FormKind::QuoteRequest.subject(Some("Services")),
            "Quote Request: Services"
        );
        assert_eq!(
            FormKind::FreeQuote.subject(None),
            "L&SD Contact Form - Free Quote Request"
        );
        assert_eq!(
            FormKind::ContactUs.success_message(),
            "Thank you! Your message has been sent."
        );
        assert_eq!(FormKind::FreeQuote.error_message(), ERROR_MESSAGE);
    }

    #[test]
    fn test_missing_required_ignores_whitespace() {
        let mut draft = FormDraft::new();
        draft.set(FormField::Name, "   ");
        draft.set(FormField::Email, "jane@x.com");
        assert_eq!(
            draft.missing_required(),
            vec![FormField::Name, FormField::Message]
        );
    }

    #[test]
    fn test_email_shape() {
        let mut draft = FormDraft::new();
        for (email, ok) in [
            ("jane@x.com", true),
            ("jane@x", false),
            ("@x.com", false),
            ("jane x@x.com", false),
            ("jane@@x.com", false),
            ("jane@x.com.", false),
        ] {
            draft.set(FormField::Email, email);
            assert_eq!(draft.email_is_plausible(), ok, "{email}");
        }
    }

    #[test]
    fn test_field_set_for_quote_request() {
        let mut draft = FormDraft::new();
        draft.set(FormField::Name, "Jane");
        draft.set(FormField::Email, "jane@x.com");
        draft.set(FormField::Message, "Need 5 laptops");

        let set = draft.to_field_set(&sender(), FormKind::QuoteRequest, Some("Computers"));
        assert_eq!(set.get("category").as_deref(), Some("Computers"));
        assert_eq!(set.get("subject").as_deref(), Some("Quote Request: Computers"));
        assert!(set.get("phone").is_none());
    }

    #[test]
    fn test_contact_forms_never_carry_category() {
        let set = FormDraft::new().to_field_set(&sender(), FormKind::ContactUs, Some("Computers"));
        assert!(set.get("category").is_none());
    }

    #[test]
    fn test_sender_debug_masks_key() {
        let rendered = format!("{:?}", sender());
        assert!(!rendered.contains("key-1234"));
    }
}
