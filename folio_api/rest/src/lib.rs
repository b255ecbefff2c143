use std::net::IpAddr;

use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_site_contracts::SiteFeatureService;
use folio_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Site, Contact> {
    site: Site,
    contact: Contact,
}

impl<Site, Contact> RestServer<Site, Contact>
where
    Site: SiteFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::site::router(self.site.into()))
            .merge(routes::contact::router(self.contact.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use folio_core_contact_contracts::MockContactFeatureService;
    use folio_core_site_contracts::MockSiteFeatureService;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn unknown_route() {
        // Arrange
        let sut = RestServer {
            site: MockSiteFeatureService::new(),
            contact: MockContactFeatureService::new(),
        }
        .router();

        // Act
        let response = sut
            .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("X-Request-Id"));
    }
}
