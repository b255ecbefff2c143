use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use folio_core_site_contracts::SiteFeatureService;

use crate::models::site::ApiSite;

pub fn router(service: Arc<impl SiteFeatureService>) -> Router<()> {
    Router::new()
        .route("/site", routing::get(site))
        .with_state(service)
}

async fn site(service: State<Arc<impl SiteFeatureService>>) -> Json<ApiSite> {
    Json(ApiSite {
        last_updated: service.last_updated(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use folio_core_site_contracts::MockSiteFeatureService;
    use folio_demo::NOW;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockSiteFeatureService::new().with_last_updated(*NOW);
        let sut = router(service.into());

        // Act
        let response = sut
            .oneshot(Request::get("/site").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"last_updated": "2026-10-17T13:05:00Z"})
        );
    }
}
