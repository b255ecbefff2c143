use anyhow::Context;
use clap::Subcommand;
use folio_config::Config;
use folio_email_contracts::{Email, EmailService};
use folio_email_impl::ResendEmailServiceImpl;
use folio_models::email_address::EmailAddressWithName;
use tracing::info;

use crate::environment::email_config;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = ResendEmailServiceImpl::new(email_config(&config));

    email_service
        .ping()
        .await
        .context("Failed to reach the email api")?;

    let receipt = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            text: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await
        .context("Failed to send email")?;

    info!(id = %receipt.id, "Test email accepted");

    Ok(())
}
