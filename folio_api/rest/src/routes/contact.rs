use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Form, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::debug;

use crate::models::contact::{
    ApiContactFailed, ApiContactForm, ApiContactInvalid, ApiContactSuccess,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    // An unreadable body is validated like an empty form
    let fields = form.map(|Form(fields)| fields).unwrap_or_else(|rejection| {
        debug!(%rejection, "could not read contact form body");
        Vec::new()
    });

    match service
        .submit(ApiContactForm::from_fields(fields).into())
        .await
    {
        Ok(()) => Json(ApiContactSuccess { success: true }).into_response(),
        Err(ContactSubmitError::Validation { errors, values }) => (
            StatusCode::BAD_REQUEST,
            Json(ApiContactInvalid { errors, values }),
        )
            .into_response(),
        Err(ContactSubmitError::Delivery { message, values }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiContactFailed {
                error: message,
                values,
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use folio_core_contact_contracts::MockContactFeatureService;
    use folio_demo::contact::{INVALID, JO, MAX};
    use folio_models::contact::{ContactField, ContactFieldErrors, ContactFormValues};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    fn request(body: &'static str) -> Request<Body> {
        Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn call(
        service: MockContactFeatureService,
        body: &'static str,
    ) -> (StatusCode, serde_json::Value) {
        let response = router(service.into()).oneshot(request(body)).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(MAX.clone(), Ok(()));

        // Act
        let result = call(
            service,
            "name=Max+Mustermann&email=max.mustermann%40example.de&phone=0118+496+0000\
             &business=Mustermann+Bakery&service=business-website\
             &message=Hello+World%21%0A%0AWe+would+like+a+new+website+for+our+bakery.\
             &isLocal=true",
        )
        .await;

        // Assert
        assert_eq!(result, (StatusCode::OK, json!({"success": true})));
    }

    #[tokio::test]
    async fn ok_minimal() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(JO.clone(), Ok(()));

        // Act
        let result = call(
            service,
            "name=Jo&email=jo%40x.com&service=other&message=Need+a+ten-char+message",
        )
        .await;

        // Assert
        assert_eq!(result, (StatusCode::OK, json!({"success": true})));
    }

    #[tokio::test]
    async fn invalid() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            INVALID.clone(),
            Err(ContactSubmitError::Validation {
                errors: ContactFieldErrors::from([
                    (ContactField::Name, "Name must be at least 2 characters"),
                    (ContactField::Email, "Please enter a valid email address"),
                    (ContactField::Service, "Please select a service"),
                    (
                        ContactField::Message,
                        "Message must be at least 10 characters",
                    ),
                ]),
                values: INVALID.clone(),
            }),
        );

        // Act
        let result = call(
            service,
            "name=J&email=not-an-email&service=&message=short",
        )
        .await;

        // Assert
        assert_eq!(
            result,
            (
                StatusCode::BAD_REQUEST,
                json!({
                    "errors": {
                        "name": "Name must be at least 2 characters",
                        "email": "Please enter a valid email address",
                        "service": "Please select a service",
                        "message": "Message must be at least 10 characters",
                    },
                    "values": {
                        "name": "J",
                        "email": "not-an-email",
                        "phone": null,
                        "business": null,
                        "service": "",
                        "message": "short",
                        "isLocal": null,
                    },
                })
            )
        );
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ContactFormValues::default(),
            Err(ContactSubmitError::Validation {
                errors: ContactFieldErrors::from([(
                    ContactField::Name,
                    "Name must be at least 2 characters",
                )]),
                values: ContactFormValues::default(),
            }),
        );

        // Act
        let (status, _) = call(service, "").await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repeated_field_keeps_first_value() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(JO.clone(), Ok(()));

        // Act
        let result = call(
            service,
            "name=Jo&name=Max&email=jo%40x.com&service=other&service=ecommerce\
             &message=Need+a+ten-char+message&utm_source=newsletter",
        )
        .await;

        // Assert
        assert_eq!(result, (StatusCode::OK, json!({"success": true})));
    }

    #[tokio::test]
    async fn missing_content_type() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ContactFormValues::default(),
            Err(ContactSubmitError::Validation {
                errors: ContactFieldErrors::from([
                    (ContactField::Name, "Name must be at least 2 characters"),
                    (ContactField::Email, "Please enter a valid email address"),
                    (ContactField::Service, "Please select a service"),
                    (
                        ContactField::Message,
                        "Message must be at least 10 characters",
                    ),
                ]),
                values: ContactFormValues::default(),
            }),
        );
        let request = Request::post("/contact")
            .body(Body::from("name=Jo&email=jo%40x.com"))
            .unwrap();

        // Act
        let response = router(service.into()).oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["errors"]["name"], "Name must be at least 2 characters");
        assert_eq!(body["values"]["name"], "");
    }

    #[tokio::test]
    async fn delivery_failed() {
        // Arrange
        let apology = "Sorry, there was a problem sending your message. Please try emailing me \
                       directly at daniel@example.com";
        let service = MockContactFeatureService::new().with_submit(
            JO.clone(),
            Err(ContactSubmitError::Delivery {
                message: apology.into(),
                values: JO.clone(),
            }),
        );

        // Act
        let result = call(
            service,
            "name=Jo&email=jo%40x.com&service=other&message=Need+a+ten-char+message",
        )
        .await;

        // Assert
        assert_eq!(
            result,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": apology,
                    "values": {
                        "name": "Jo",
                        "email": "jo@x.com",
                        "phone": null,
                        "business": null,
                        "service": "other",
                        "message": "Need a ten-char message",
                        "isLocal": null,
                    },
                })
            )
        );
    }
}
