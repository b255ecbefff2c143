use std::sync::Arc;

use chrono_tz::Tz;
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_di::Build;
use folio_email_contracts::{Email, EmailReceipt, EmailService};
use folio_models::{
    contact::{ContactFormValues, ContactSubmission},
    email_address::EmailAddressWithName,
};
use folio_shared_contracts::time::TimeService;
use folio_templates_contracts::{
    ContactNotification, ContactNotificationHtmlTemplate, ContactNotificationTextTemplate,
    TemplateService,
};
use tracing::{debug, error, info};


/// Appended to the subject of notifications about local clients.
pub const LOCAL_BADGE: &str = "🎯 LOCAL CLIENT";

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Time, Template, Email> {
    time: Time,
    template: Template,
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Mailbox receiving the notifications
    pub recipient: Arc<EmailAddressWithName>,
    /// Time zone of the timestamps in the notifications
    pub timezone: Tz,
}

impl<Time, Template, EmailS> ContactFeatureService
    for ContactFeatureServiceImpl<Time, Template, EmailS>
where
    Time: TimeService,
    Template: TemplateService,
    EmailS: EmailService,
{
    // The result carries the submitted values, so it is not recorded
    #[tracing::instrument(skip_all)]
    async fn submit(&self, values: ContactFormValues) -> Result<(), ContactSubmitError> {
        let submission = match ContactSubmission::validate(&values) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(?errors, "rejected invalid contact form submission");
                return Err(ContactSubmitError::Validation { errors, values });
            }
        };

        match self.deliver(&submission).await {
            Ok(receipt) => {
                info!(
                    id = %receipt.id,
                    service = %*submission.service,
                    is_local = submission.is_local,
                    "forwarded contact form submission"
                );
                Ok(())
            }
            Err(err) => {
                error!("Failed to send contact form submission: {err:#}");
                Err(ContactSubmitError::Delivery {
                    message: format!(
                        "Sorry, there was a problem sending your message. Please try emailing me \
                         directly at {}",
                        self.config.recipient.email()
                    ),
                    values,
                })
            }
        }
    }
}

impl<Time, Template, EmailS> ContactFeatureServiceImpl<Time, Template, EmailS>
where
    Time: TimeService,
    Template: TemplateService,
    EmailS: EmailService,
{
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<EmailReceipt> {
        let received = self.time.now().with_timezone(&self.config.timezone);

        let notification = ContactNotification {
            name: (*submission.name).clone(),
            email: submission.email.to_string(),
            phone: submission.phone.as_ref().map(|x| (**x).clone()),
            business: submission.business.as_ref().map(|x| (**x).clone()),
            service: submission.service.label().into(),
            message: (*submission.message).clone(),
            is_local: submission.is_local,
            received_date: received.format("%-d %B %Y at %H:%M").to_string(),
            received_at: received.format("%d/%m/%Y, %H:%M:%S").to_string(),
        };

        let html = self
            .template
            .render(&ContactNotificationHtmlTemplate(notification.clone()))?;
        let text = self
            .template
            .render(&ContactNotificationTextTemplate(notification))?;

        self.email
            .send(Email {
                recipient: (*self.config.recipient).clone(),
                subject: subject(submission),
                html,
                text,
                reply_to: Some(submission.email.clone()),
            })
            .await
    }
}

fn subject(submission: &ContactSubmission) -> String {
    let mut subject = format!("New Lead: {} - {}", *submission.name, *submission.service);
    if submission.is_local {
        subject.push(' ');
        subject.push_str(LOCAL_BADGE);
    }
    subject
}
