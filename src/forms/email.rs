use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const NAME_MAX_LEN_VALIDATOR: u64 = 128;
const MESSAGE_MAX_LEN_VALIDATOR: u64 = 5000;

pub type EmailFormResult<T> = Result<T, EmailFormError>;

#[derive(Debug, Error)]
pub enum EmailFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("invalid order id `{0}`")]
    InvalidOrderId(i32),
}

/// Body of `POST /api/send-email`, discriminated by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmailForm {
    /// Contact form submission forwarded to the shop.
    Contact(ContactForm),
    /// Confirmation for an existing order, sent to the shop and the customer.
    Order(OrderEmailForm),
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = MESSAGE_MAX_LEN_VALIDATOR))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEmailForm {
    pub order_id: i32,
}

/// Sanitized contact message.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Validated email request.
#[derive(Debug, Clone, PartialEq)]
pub enum EmailRequest {
    Contact(ContactMessage),
    OrderConfirmation { order_id: i32 },
}

impl EmailForm {
    pub fn into_request(self) -> EmailFormResult<EmailRequest> {
        match self {
            EmailForm::Contact(form) => {
                form.validate()?;

                let message = sanitize_multiline_text(&form.message);
                if message.is_empty() {
                    return Err(EmailFormError::EmptyMessage);
                }

                Ok(EmailRequest::Contact(ContactMessage {
                    name: sanitize_inline_text(&form.name),
                    email: form.email.trim().to_string(),
                    phone: form
                        .phone
                        .as_deref()
                        .map(sanitize_inline_text)
                        .filter(|phone| !phone.is_empty()),
                    message,
                }))
            }
            EmailForm::Order(form) => {
                if form.order_id <= 0 {
                    return Err(EmailFormError::InvalidOrderId(form.order_id));
                }
                Ok(EmailRequest::OrderConfirmation {
                    order_id: form.order_id,
                })
            }
        }
    }
}
