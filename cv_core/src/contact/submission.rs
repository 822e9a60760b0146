//! Contact form fields and the request-scoped submission built from a payload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contact form submission. Lives for a single request and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Reads the contact fields out of an arbitrary JSON payload.
    ///
    /// Every field defaults to the empty string when the key is absent, when the
    /// value is not a string, or when the payload is not an object at all. An
    /// absent field and an empty one are indistinguishable afterwards.
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            name: text_field(payload, ContactField::Name),
            email: text_field(payload, ContactField::Email),
            message: text_field(payload, ContactField::Message),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn has(&self, field: ContactField) -> bool {
        !self.field(field).is_empty()
    }
}

fn text_field(payload: &Value, field: ContactField) -> String {
    payload
        .get(field.as_str())
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}
