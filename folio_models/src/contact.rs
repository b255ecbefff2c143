use std::collections::BTreeMap;

use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// The raw values of a contact form submission, exactly as they were sent by
/// the client. Kept around so they can be echoed back when a submission
/// fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub business: Option<String>,
    pub service: String,
    pub message: String,
    pub is_local: Option<String>,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<ContactPhone>,
    pub business: Option<ContactBusiness>,
    pub service: ServiceInterest,
    pub message: ContactMessageContent,
    /// Whether the submitter asked for the local client discount.
    pub is_local: bool,
}

#[nutype(
    validate(len_char_min = 2, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize)
)]
pub struct ContactPhone(String);

#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize)
)]
pub struct ContactBusiness(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ServiceInterest(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// Human readable labels of the services offered on the website.
pub const SERVICE_LABELS: &[(&str, &str)] = &[
    ("business-website", "Business Website"),
    ("ecommerce", "E-Commerce / Online Shop"),
    ("web-app", "Custom Web Application"),
    ("maintenance", "Website Maintenance"),
    ("redesign", "Website Redesign"),
    ("other", "Other Service"),
];

impl ServiceInterest {
    /// Returns the human readable label of this service. Unknown services are
    /// labeled with their raw identifier.
    pub fn label(&self) -> &str {
        SERVICE_LABELS
            .iter()
            .find(|(key, _)| *key == self.as_str())
            .map_or(self.as_str(), |&(_, label)| label)
    }
}

/// The fields of the contact form that are subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Business,
    Service,
    Message,
}

/// Validation messages keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactFieldErrors(BTreeMap<ContactField, String>);

impl ContactFieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Records the error of `result` under `field` and returns the successful
    /// value, if any.
    fn check<T>(&mut self, field: ContactField, result: Result<T, &str>) -> Option<T> {
        result
            .map_err(|message| {
                self.0.entry(field).or_insert_with(|| message.into());
            })
            .ok()
    }
}

impl<const N: usize> From<[(ContactField, &str); N]> for ContactFieldErrors {
    fn from(value: [(ContactField, &str); N]) -> Self {
        Self(
            value
                .into_iter()
                .map(|(field, message)| (field, message.into()))
                .collect(),
        )
    }
}

impl ContactSubmission {
    /// Validate the raw form values.
    ///
    /// Every field is checked independently and all violations are returned
    /// together.
    pub fn validate(values: &ContactFormValues) -> Result<Self, ContactFieldErrors> {
        let mut errors = ContactFieldErrors::default();

        let name = errors.check(
            ContactField::Name,
            ContactName::try_new(values.name.clone()).map_err(|err| match err {
                ContactNameError::LenCharMinViolated => "Name must be at least 2 characters",
                ContactNameError::LenCharMaxViolated => "Name too long",
            }),
        );

        let email = errors.check(
            ContactField::Email,
            values
                .email
                .parse::<EmailAddress>()
                .ok()
                .filter(is_deliverable)
                .ok_or("Please enter a valid email address"),
        );

        let service = errors.check(
            ContactField::Service,
            ServiceInterest::try_new(values.service.clone()).map_err(|err| match err {
                ServiceInterestError::NotEmptyViolated => "Please select a service",
            }),
        );

        let message = errors.check(
            ContactField::Message,
            ContactMessageContent::try_new(values.message.clone()).map_err(|err| match err {
                ContactMessageContentError::LenCharMinViolated => {
                    "Message must be at least 10 characters"
                }
                ContactMessageContentError::LenCharMaxViolated => "Message too long",
            }),
        );

        let phone = values
            .phone
            .clone()
            .map(ContactPhone::new)
            .filter(|phone| !phone.is_empty());

        let business = values
            .business
            .clone()
            .map(ContactBusiness::new)
            .filter(|business| !business.is_empty());

        match (name, email, service, message) {
            (Some(name), Some(email), Some(service), Some(message)) => Ok(Self {
                name,
                email,
                phone,
                business,
                service,
                message,
                is_local: values.is_local.as_deref() == Some("true"),
            }),
            _ => Err(errors),
        }
    }
}

/// Whether `email` has a dotted domain name with an alphabetic top level
/// domain of at least two letters and an unquoted local part.
///
/// Quoted local parts, ip literals and single label domains are valid
/// according to the RFC but rejected by most providers.
fn is_deliverable(email: &EmailAddress) -> bool {
    let (user, domain) = (email.0.user(), email.0.domain());
    let tld = domain.rsplit_once('.').map(|(_, tld)| tld);

    !user.contains('"')
        && !domain.starts_with('[')
        && tld.is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}
