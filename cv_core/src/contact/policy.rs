//! Required-field validation shared by every site variant

use super::{ContactError, ContactField, Submission};
use crate::config::ContactConfig;
use crate::site::SiteVariant;

pub const SHELL_ACKNOWLEDGMENT: &str = "Message sent successfully!";
pub const SHELL_FAILURE: &str = "Error: Missing required fields";

pub const TERMINAL_ACKNOWLEDGMENT: &str =
    "✓ Email sent successfully\n✓ From: {name} ({email})\n✓ Message registered in the system";
pub const TERMINAL_FAILURE: &str = "✗ Error: Missing required fields";

/// Which fields a submission must carry and what to answer either way.
///
/// The acknowledgment is a template: `{name}`, `{email}` and `{message}` are
/// replaced by the submitted values, anything else is copied through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPolicy {
    required: Vec<ContactField>,
    acknowledgment: String,
    failure_message: String,
}

impl ContactPolicy {
    pub fn new(
        required: Vec<ContactField>,
        acknowledgment: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            required,
            acknowledgment: acknowledgment.into(),
            failure_message: failure_message.into(),
        }
    }

    pub fn for_variant(variant: SiteVariant) -> Self {
        match variant {
            SiteVariant::Shell => Self::new(
                vec![ContactField::Email, ContactField::Message],
                SHELL_ACKNOWLEDGMENT,
                SHELL_FAILURE,
            ),
            SiteVariant::Terminal => Self::new(
                vec![ContactField::Name, ContactField::Email, ContactField::Message],
                TERMINAL_ACKNOWLEDGMENT,
                TERMINAL_FAILURE,
            ),
        }
    }

    /// Variant preset with any overrides from the `contact` config section applied.
    pub fn from_config(variant: SiteVariant, config: &ContactConfig) -> Self {
        let mut policy = Self::for_variant(variant);

        if let Some(required) = &config.required_fields {
            policy.required = required.clone();
        }
        if let Some(acknowledgment) = &config.acknowledgment {
            policy.acknowledgment = acknowledgment.clone();
        }
        if let Some(failure_message) = &config.failure_message {
            policy.failure_message = failure_message.clone();
        }

        policy
    }

    pub fn required_fields(&self) -> &[ContactField] {
        &self.required
    }

    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    pub fn missing_fields(&self, submission: &Submission) -> Vec<ContactField> {
        self.required
            .iter()
            .copied()
            .filter(|field| !submission.has(*field))
            .collect()
    }

    /// Accepts the submission and returns the acknowledgment text, or reports
    /// which required fields were empty.
    pub fn evaluate(&self, submission: &Submission) -> Result<String, ContactError> {
        let missing = self.missing_fields(submission);
        if !missing.is_empty() {
            return Err(ContactError::MissingFields {
                missing,
                message: self.failure_message.clone(),
            });
        }

        Ok(render_acknowledgment(&self.acknowledgment, submission))
    }
}

/// Single-pass placeholder substitution. Inserted values are never re-scanned.
pub fn render_acknowledgment(template: &str, submission: &Submission) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let placeholder = after
            .find('}')
            .and_then(|close| ContactField::from_key(&after[..close]).map(|field| (field, close)));

        match placeholder {
            Some((field, close)) => {
                rendered.push_str(submission.field(field));
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}
