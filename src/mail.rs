//! Outgoing transactional email.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("outgoing mail is not configured")]
    Disabled,
    #[error("invalid address `{0}`")]
    InvalidAddress(String),
    #[error("failed to build message: {0}")]
    Build(String),
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Plain-text message ready to be handed to a [`Mailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            reply_to: None,
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }
}

/// Delivery backend shared by the HTTP workers.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Mailer that relays through an authenticated SMTP server.
pub struct SmtpMailer {
    from: Mailbox,
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let smtp = config.smtp.as_ref().ok_or(MailError::Disabled)?;

        log::info!("Initializing SMTP mailer for {}:{}", smtp.host, smtp.port);

        let mut builder = SmtpTransport::relay(&smtp.host)
            .map_err(|err| MailError::Transport(err.to_string()))?
            .port(smtp.port);

        if !smtp.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ));
        }

        Ok(Self {
            from: parse_mailbox(&config.from)?,
            transport: builder.build(),
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        let message = builder
            .body(email.body.clone())
            .map_err(|err| MailError::Build(err.to_string()))?;

        self.transport
            .send(&message)
            .map_err(|err| MailError::Transport(err.to_string()))?;

        log::info!("Sent `{}` to {}", email.subject, email.to);
        Ok(())
    }
}

/// Stand-in used when SMTP is not configured; every send fails.
pub struct DisabledMailer;

impl Mailer for DisabledMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        log::warn!("Dropping `{}` to {}: mail is disabled", email.subject, email.to);
        Err(MailError::Disabled)
    }
}

/// Pick the SMTP mailer when configured, the disabled one otherwise.
pub fn build_mailer(config: &MailConfig) -> Result<Box<dyn Mailer>, MailError> {
    if config.smtp.is_none() {
        return Ok(Box::new(DisabledMailer));
    }
    Ok(Box::new(SmtpMailer::new(config)?))
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.trim()
        .parse::<Mailbox>()
        .map_err(|_| MailError::InvalidAddress(raw.to_string()))
}

#[cfg(test)]
pub mod mock {
    use mockall::mock;

    use super::{MailError, Mailer, OutgoingEmail};

    mock! {
        pub Mailer {}

        impl Mailer for Mailer {
            fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_mailer_rejects_sends() {
        let email = OutgoingEmail::new("shop@example.com", "Hello", "Body");
        assert!(matches!(
            DisabledMailer.send(&email),
            Err(MailError::Disabled)
        ));
    }

    #[test]
    fn mailbox_parsing_accepts_display_names() {
        assert!(parse_mailbox("Pâtisserie <commandes@example.com>").is_ok());
        assert!(matches!(
            parse_mailbox("not an address"),
            Err(MailError::InvalidAddress(_))
        ));
    }

    #[test]
    fn build_mailer_without_smtp_is_disabled() {
        let config = MailConfig {
            from: "shop@example.com".to_string(),
            shop_email: "shop@example.com".to_string(),
            smtp: None,
        };

        let mailer = build_mailer(&config).expect("mailer");
        let email = OutgoingEmail::new("client@example.com", "Subject", "Body");
        assert!(matches!(mailer.send(&email), Err(MailError::Disabled)));
    }
}
