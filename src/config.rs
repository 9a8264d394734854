//! Environment-driven server configuration.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// SMTP relay credentials used by [`crate::mail::SmtpMailer`].
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Addresses used when composing outgoing mail.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Sender mailbox, e.g. `Pâtisserie <commandes@example.com>`.
    pub from: String,
    /// Inbox that receives contact messages and order notifications.
    pub shop_email: String,
    /// Relay settings; `None` disables outgoing mail.
    pub smtp: Option<SmtpConfig>,
}

/// Settings read once at startup and shared with the handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Directory receiving uploaded images.
    pub upload_dir: PathBuf,
    /// Prefix of the URLs returned for stored uploads; the directory itself
    /// is served at `/uploads`.
    pub public_upload_url: String,
    pub mail: MailConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> Self {
        let smtp = match env::var("SMTP_HOST") {
            Ok(host) if !host.trim().is_empty() => Some(SmtpConfig {
                host,
                port: parse_or("SMTP_PORT", 587),
                username: env::var("SMTP_USERNAME").unwrap_or_default(),
                password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            }),
            _ => {
                log::warn!("SMTP_HOST not set, outgoing mail is disabled");
                None
            }
        };

        let shop_email =
            env::var("SHOP_EMAIL").unwrap_or_else(|_| "contact@localhost".to_string());

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or("app.db".to_string()),
            address: env::var("ADDRESS").unwrap_or("127.0.0.1".to_string()),
            port: parse_or("PORT", 8080),
            upload_dir: PathBuf::from(env::var("UPLOAD_DIR").unwrap_or("uploads".to_string())),
            public_upload_url: env::var("PUBLIC_UPLOAD_URL").unwrap_or("/uploads".to_string()),
            mail: MailConfig {
                from: env::var("MAIL_FROM").unwrap_or_else(|_| shop_email.clone()),
                shop_email,
                smtp,
            },
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|err| {
            log::warn!("Invalid {key} value `{raw}` ({err}), using default: {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_missing_variable() {
        let port: u16 = parse_or("PASTRY_SHOP_TEST_UNSET_PORT", 9090);
        assert_eq!(port, 9090);
    }
}
