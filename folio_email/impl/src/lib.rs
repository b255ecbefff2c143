use std::sync::Arc;

use anyhow::{bail, Context};
use folio_di::Build;
use folio_email_contracts::{Email, EmailReceipt, EmailService};
use folio_models::{email_address::EmailAddressWithName, Sensitive};
use folio_utils::trace_instrument;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

mod http;

/// Sends emails through the [Resend](https://resend.com/docs/api-reference/emails/send-email)
/// HTTP api.
#[derive(Debug, Clone, Build)]
pub struct ResendEmailServiceImpl {
    config: ResendEmailServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ResendEmailServiceConfig {
    pub api_endpoint: Arc<Url>,
    pub api_key: Arc<Sensitive<String>>,
    pub from: Arc<EmailAddressWithName>,
}

impl ResendEmailServiceImpl {
    pub fn new(config: ResendEmailServiceConfig) -> Self {
        Self {
            config,
            http: Default::default(),
        }
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.config
            .api_endpoint
            .join(path)
            .with_context(|| format!("Failed to build email api url for {path}"))
    }
}

impl EmailService for ResendEmailServiceImpl {
    #[tracing::instrument(skip_all, fields(recipient = %email.recipient.email()))]
    async fn send(&self, email: Email) -> anyhow::Result<EmailReceipt> {
        let request = SendEmailRequest {
            from: mailbox(&self.config.from),
            to: [mailbox(&email.recipient)],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: email.reply_to.as_ref().map(|x| x.as_str()),
        };

        let response = self
            .http
            .post(self.url("emails")?)
            .bearer_auth(&**self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send email request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Email api rejected the email with status {status}: {body}");
        }

        response
            .json::<SendEmailResponse>()
            .await
            .map(Into::into)
            .context("Failed to deserialize email api response")
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        self.http
            .get(self.url("domains")?)
            .bearer_auth(&**self.config.api_key)
            .send()
            .await
            .context("Failed to reach email api")?
            .error_for_status()
            .context("Email api did not accept the api key")?;

        Ok(())
    }
}

/// Format a mailbox as `Name <address>`, or just `address` if it has no name.
fn mailbox(mailbox: &EmailAddressWithName) -> String {
    match mailbox.0.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!("{name} <{}>", mailbox.0.email),
        _ => mailbox.0.email.to_string(),
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [String; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl From<SendEmailResponse> for EmailReceipt {
    fn from(value: SendEmailResponse) -> Self {
        Self { id: value.id }
    }
}
