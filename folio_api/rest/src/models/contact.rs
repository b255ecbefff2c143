use folio_models::contact::{ContactFieldErrors, ContactFormValues};
use serde::Serialize;

/// The fields of the contact form as posted by the browser.
///
/// Every field is optional here so that missing fields are reported as
/// validation errors instead of rejected by the extractor.
#[derive(Debug, Clone, Default)]
pub struct ApiContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub is_local: Option<String>,
}

impl ApiContactForm {
    /// Collect the known fields from the decoded form body. Repeated fields
    /// keep their first value and unknown fields are ignored.
    pub fn from_fields(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in fields {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "business" => &mut form.business,
                "service" => &mut form.service,
                "message" => &mut form.message,
                "isLocal" => &mut form.is_local,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

impl From<ApiContactForm> for ContactFormValues {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            phone: value.phone,
            business: value.business,
            service: value.service.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
            is_local: value.is_local,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactSuccess {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiContactInvalid {
    pub errors: ContactFieldErrors,
    pub values: ContactFormValues,
}

#[derive(Debug, Serialize)]
pub struct ApiContactFailed {
    pub error: String,
    pub values: ContactFormValues,
}
