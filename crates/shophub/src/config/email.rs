use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::lock::Mutex;
use handlebars::Handlebars;
use lettre::message::{header, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde_json::Value;

use crate::{Error, Success};

lazy_static! {
    static ref HANDLEBARS: Handlebars<'static> = Handlebars::new();
}

/// SMTP mail server configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct SMTPSettings {
    /// Sender address
    pub from: String,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// SMTP host
    pub host: String,

    /// SMTP port
    pub port: Option<i32>,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Whether to use TLS
    pub use_tls: Option<bool>,
}

/// Email template
///
/// `text` and `html` are handlebars templates; the account lifecycle
/// provides `{{code}}`, `{{url}}` and `{{email}}` as variables.
#[derive(Serialize, Deserialize, Clone)]
pub struct Template {
    /// Subject line
    pub title: String,
    /// Plain text version of this email
    pub text: String,
    /// HTML version of this email
    pub html: Option<String>,
}

/// Email templates
#[derive(Serialize, Deserialize, Clone)]
pub struct Templates {
    /// Template for the registration verification code
    pub verify: Template,
    /// Template for re-sent verification codes
    pub resend: Template,
    /// Template for password reset codes
    pub reset: Template,
}

impl Default for Templates {
    fn default() -> Templates {
        Templates {
            verify: Template {
                title: "Verify your email".to_string(),
                text: "Welcome to ShopHub!\n\nYour verification code is: {{code}}\n\nThis code will expire in 1 minute. If you didn't sign up, you can safely ignore this email.".to_string(),
                html: None,
            },
            resend: Template {
                title: "Verify your email - New code".to_string(),
                text: "Your new verification code is: {{code}}\n\nThis code will expire in 1 minute.".to_string(),
                html: None,
            },
            reset: Template {
                title: "Reset Your Password - ShopHub".to_string(),
                text: "We received a request to reset your password.\n\nEnter this code in the app: {{code}}\n\nOr open this link: {{url}}\n\nThis code will expire in 1 minute. If you didn't request this reset, ignore this email; your password stays unchanged.".to_string(),
                html: None,
            },
        }
    }
}

/// One-time code expiry policy
#[derive(Serialize, Deserialize, Clone)]
pub struct ExpiryConfig {
    /// How long freshly issued codes last (in seconds)
    pub expire_verification: i64,

    /// Window granted to finish the reset once a code has been
    /// validated (in seconds)
    pub reset_grace_period: i64,
}

impl Default for ExpiryConfig {
    fn default() -> ExpiryConfig {
        ExpiryConfig {
            expire_verification: 70,
            reset_grace_period: 180,
        }
    }
}

/// A delivered (or captured) email
#[derive(Debug, Clone)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub text: String,
    /// Template variables the mail was rendered with
    pub variables: Value,
}

/// Mail sink for tests
///
/// Captures outgoing mail instead of delivering it and can be switched
/// into a failing state to exercise delivery-failure paths.
#[derive(Default, Clone)]
pub struct DummyMailer {
    pub outbox: Arc<Mutex<Vec<Mail>>>,
    fail: Arc<AtomicBool>,
}

impl DummyMailer {
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn last_mail(&self) -> Option<Mail> {
        self.outbox.lock().await.last().cloned()
    }

    async fn deliver(&self, mail: Mail) -> Success {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::EmailFailed);
        }

        self.outbox.lock().await.push(mail);
        Ok(())
    }
}

/// Outbound mail transport
#[derive(Clone)]
pub enum Mailer {
    Smtp(SMTPSettings),
    Dummy(DummyMailer),
}

impl Default for Mailer {
    fn default() -> Self {
        Mailer::Dummy(DummyMailer::default())
    }
}

impl Mailer {
    /// Render a template and hand it to the transport
    pub async fn send_email(&self, to: String, template: &Template, variables: Value) -> Success {
        let text = HANDLEBARS
            .render_template(&template.text, &variables)
            .map_err(|_| Error::RenderFail)?;

        let html = match &template.html {
            Some(html) => Some(
                HANDLEBARS
                    .render_template(html, &variables)
                    .map_err(|_| Error::RenderFail)?,
            ),
            None => None,
        };

        match self {
            Mailer::Smtp(smtp) => smtp.send(to, &template.title, text, html),
            Mailer::Dummy(dummy) => {
                dummy
                    .deliver(Mail {
                        to,
                        subject: template.title.clone(),
                        text,
                        variables,
                    })
                    .await
            }
        }
    }
}

fn generate_multipart(text: String, html: Option<String>) -> MultiPart {
    let text_part = SinglePart::builder()
        .header(
            "text/plain; charset=utf8"
                .parse::<header::ContentType>()
                .unwrap(),
        )
        .body(text);

    if let Some(html) = html {
        MultiPart::alternative().singlepart(text_part).singlepart(
            SinglePart::builder()
                .header(
                    "text/html; charset=utf8"
                        .parse::<header::ContentType>()
                        .unwrap(),
                )
                .body(html),
        )
    } else {
        MultiPart::mixed().singlepart(text_part)
    }
}

impl SMTPSettings {
    fn send(&self, to: String, subject: &str, text: String, html: Option<String>) -> Success {
        let mut message = Message::builder()
            .from(self.from.parse().map_err(|_| Error::InternalError)?)
            .to(to.parse().map_err(|_| Error::InternalError)?)
            .subject(subject);

        if let Some(reply_to) = &self.reply_to {
            message = message.reply_to(reply_to.parse().map_err(|_| Error::InternalError)?);
        }

        let message = message
            .multipart(generate_multipart(text, html))
            .map_err(|_| Error::InternalError)?;

        let mut transport = if self.use_tls.unwrap_or(true) {
            SmtpTransport::relay(&self.host).map_err(|_| Error::EmailFailed)?
        } else {
            SmtpTransport::builder_dangerous(&self.host)
        };

        if let Some(port) = self.port {
            transport = transport.port(port as u16);
        }

        transport
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ))
            .build()
            .send(&message)
            .map_err(|err| {
                error!("Failed to submit email to {}: {:?}", to, err);
                Error::EmailFailed
            })?;

        Ok(())
    }
}

/// Outbound email configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct EmailConfig {
    /// Mail transport
    ///
    /// Constructed by the embedding application; not part of the
    /// serialized configuration.
    #[serde(skip)]
    pub mailer: Mailer,

    pub templates: Templates,

    pub expiry: ExpiryConfig,

    /// Base URL the reset link points at
    pub reset_url: String,
}

impl Default for EmailConfig {
    fn default() -> EmailConfig {
        EmailConfig {
            mailer: Mailer::default(),
            templates: Templates::default(),
            expiry: ExpiryConfig::default(),
            reset_url: "http://localhost:3000/reset-password".to_string(),
        }
    }
}
