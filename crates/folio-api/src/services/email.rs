//! Email service for relaying contact-form messages via SMTP.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use tracing::info;

use folio_core::models::ContactMessage;
use folio_core::Config;

/// Mail-sending capability behind the contact relay.
/// `from_config` returns `None` when SMTP is not configured.
#[derive(Clone)]
pub struct EmailService {
    mailer: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl EmailService {
    /// Create email service from config. Returns `None` if SMTP is not configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let host = config.smtp_host()?;
        let from = config.smtp_from()?.to_string();
        let port = config.smtp_port().unwrap_or(Config::smtp_default_port());

        let mailer = if config.smtp_tls() {
            let b = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host).ok()?;
            let b = b.port(port);
            let b = if let (Some(u), Some(p)) = (config.smtp_user(), config.smtp_password()) {
                b.credentials(Credentials::new(u.to_string(), p.to_string()))
            } else {
                b
            };
            tracing::info!(
                host = %host,
                port = port,
                "Email service initialized (SMTP with STARTTLS)"
            );
            b.build()
        } else {
            let b = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port);
            let b = if let (Some(u), Some(p)) = (config.smtp_user(), config.smtp_password()) {
                b.credentials(Credentials::new(u.to_string(), p.to_string()))
            } else {
                b
            };
            tracing::info!(host = %host, port = port, "Email service initialized (SMTP)");
            b.build()
        };

        Some(Self {
            mailer: Arc::new(mailer),
            from,
        })
    }

    /// Relay a validated contact message to the operator address.
    /// One attempt, no retry.
    pub async fn send_contact(&self, to: &str, contact: &ContactMessage) -> Result<(), String> {
        let to_addr: Mailbox = to
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;
        let from_addr: Mailbox = self
            .from
            .parse()
            .map_err(|e| format!("Invalid SMTP_FROM: {}", e))?;

        let email = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject(contact_subject(contact))
            .header(ContentType::TEXT_HTML)
            .body(contact_body(contact))
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await.map_err(|e| e.to_string())?;
        info!("Contact message relayed");
        Ok(())
    }
}

fn contact_subject(contact: &ContactMessage) -> String {
    format!("Message from {}", contact.name)
}

/// HTML body for the relayed message. User-supplied fields are escaped; the
/// sender controls them and they end up rendered in the operator's client.
fn contact_body(contact: &ContactMessage) -> String {
    format!(
        "<p><strong>Email:</strong> {}</p><p>{}</p>",
        html_escape(&contact.email),
        html_escape(&contact.message)
    )
}

/// Simple HTML escaping for security.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn from_config_returns_none_without_smtp_host() {
        let config = Config {
            server_port: 3000,
            environment: "development".to_string(),
            cors_origins: vec![],
            media_dir: "uploads".to_string(),
            public_base_url: "http://localhost:3000/uploads".to_string(),
            max_upload_size_bytes: 1024,
            smtp_host: None,
            smtp_port: None,
            smtp_user: None,
            smtp_password: None,
            smtp_from: Some("folio@example.com".to_string()),
            smtp_tls: true,
            contact_recipient: None,
        };
        assert!(EmailService::from_config(&config).is_none());
    }

    #[test]
    fn subject_embeds_sender_name() {
        let subject = contact_subject(&contact("Ada", "ada@example.com", "hi"));
        assert_eq!(subject, "Message from Ada");
    }

    #[test]
    fn body_escapes_user_controlled_html() {
        let body = contact_body(&contact(
            "Mallory",
            "m@example.com",
            "<script>alert('x')</script>",
        ));
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_escape_covers_all_special_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
