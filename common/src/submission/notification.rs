use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE_NAME: &str = "reminder_tempate_lic";
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// What the browser asks the notification relay to send: only the recipient.
/// The relay picks the template and attaches the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyRequest {
    pub to: String,
}

impl NotifyRequest {
    /// Builds a request for `phone`, keeping digits only (`+91 98765-43210`
    /// becomes `919876543210`).
    pub fn for_phone(phone: &str) -> Self {
        Self {
            to: digits_only(phone),
        }
    }
}

/// Template message body accepted by the messaging API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub to: String,
    pub recipient_type: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub template: MessageTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub language: TemplateLanguage,
    pub name: String,
    pub components: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLanguage {
    pub policy: String,
    pub code: String,
}

impl NotificationRequest {
    pub fn template(to: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            recipient_type: "individual".to_string(),
            kind: "template".to_string(),
            template: MessageTemplate {
                language: TemplateLanguage {
                    policy: "deterministic".to_string(),
                    code: code.into(),
                },
                name: name.into(),
                components: Vec::new(),
            },
        }
    }
}

pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
