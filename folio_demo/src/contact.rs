use std::sync::LazyLock;

use folio_models::{contact::ContactFormValues, email_address::EmailAddressWithName};

pub static OPERATOR: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "Daniel <daniel@example.com>".parse().unwrap());

/// A minimal valid submission.
pub static JO: LazyLock<ContactFormValues> = LazyLock::new(|| ContactFormValues {
    name: "Jo".into(),
    email: "jo@x.com".into(),
    phone: None,
    business: None,
    service: "other".into(),
    message: "Need a ten-char message".into(),
    is_local: None,
});

/// A valid submission with every field filled in, eligible for the local
/// discount.
pub static MAX: LazyLock<ContactFormValues> = LazyLock::new(|| ContactFormValues {
    name: "Max Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    phone: Some("0118 496 0000".into()),
    business: Some("Mustermann Bakery".into()),
    service: "business-website".into(),
    message: "Hello World!\n\nWe would like a new website for our bakery.".into(),
    is_local: Some("true".into()),
});

/// A submission failing validation on every checked field.
pub static INVALID: LazyLock<ContactFormValues> = LazyLock::new(|| ContactFormValues {
    name: "J".into(),
    email: "not-an-email".into(),
    phone: None,
    business: None,
    service: "".into(),
    message: "short".into(),
    is_local: None,
});
