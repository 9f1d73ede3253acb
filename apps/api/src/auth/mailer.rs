use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpConfig;
use crate::errors::AppError;

const SIGN_IN_SUBJECT: &str = "Sign in to TruthLens";

/// Delivers magic links. Swap the implementation to plug in a mail transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_magic_link(&self, email: &str, link: &str) -> Result<(), AppError>;
}

/// Writes the link to the log instead of sending mail. Used in development.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_magic_link(&self, email: &str, link: &str) -> Result<(), AppError> {
        info!(email, link, "Magic sign-in link issued");
        Ok(())
    }
}

/// Sends magic links through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let builder = if config.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let builder = match (&config.user, &config.password) {
            (Some(user), Some(password)) => {
                builder.credentials(Credentials::new(user.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            transport: builder.port(config.port).build(),
            from: config.from.parse()?,
        })
    }

    fn build_message(&self, email: &str, link: &str) -> Result<Message, AppError> {
        let to: Mailbox = email
            .parse()
            .map_err(|_| AppError::Validation("A valid email address is required".to_string()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(SIGN_IN_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Sign in to TruthLens by opening this link:\n\n{link}\n\n\
                 The link works once. If you did not request it, ignore this email.\n"
            ))
            .map_err(|e| AppError::Internal(e.into()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_magic_link(&self, email: &str, link: &str) -> Result<(), AppError> {
        let message = self.build_message(email, link)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
        info!(email, "Magic sign-in link mailed");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config(port: u16) -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port,
            user: Some("mailer".to_string()),
            password: Some("secret".to_string()),
            from: "TruthLens <noreply@example.com>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_mailer_accepts_links() {
        LogMailer
            .send_magic_link("reader@example.com", "http://localhost:3000/x")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_smtp_message_carries_link() {
        let mailer = SmtpMailer::new(&smtp_config(587)).unwrap();
        let link = "http://localhost:3000/api/auth/verify?email=reader%40example.com&token=abc123";
        let message = mailer.build_message("reader@example.com", link).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: reader@example.com"));
        assert!(raw.contains(SIGN_IN_SUBJECT));
        assert!(raw.contains(link));
    }

    #[tokio::test]
    async fn test_smtp_mailer_rejects_bad_addresses() {
        let mut config = smtp_config(465);
        assert!(SmtpMailer::new(&config).is_ok());

        config.from = "not an address".to_string();
        assert!(SmtpMailer::new(&config).is_err());

        let mailer = SmtpMailer::new(&smtp_config(587)).unwrap();
        assert!(matches!(
            mailer.build_message("nope", "http://x"),
            Err(AppError::Validation(_))
        ));
    }
}
