use std::future::Future;

use folio_models::contact::{ContactFieldErrors, ContactFormValues};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and forward it to the site operator
    /// by email.
    ///
    /// Every call attempts exactly one delivery. Failed deliveries are not
    /// retried.
    fn submit(
        &self,
        values: ContactFormValues,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Invalid contact form submission.")]
    Validation {
        errors: ContactFieldErrors,
        values: ContactFormValues,
    },
    #[error("Failed to deliver contact form submission.")]
    Delivery {
        /// Apology to show to the submitter
        message: String,
        values: ContactFormValues,
    },
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        values: ContactFormValues,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
