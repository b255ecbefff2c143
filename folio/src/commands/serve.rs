use folio_config::Config;
use folio_di::Provide;
use folio_email_contracts::EmailService;
use tracing::{info, warn};

use crate::environment::{
    types::{Email, RestServer},
    ConfigProvider, Provider,
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider);

    info!("Checking email api credentials");
    let email: Email = provider.provide();
    match email.ping().await {
        Ok(()) => info!("Email api is reachable"),
        Err(err) => warn!("Email api check failed, contact form submissions may fail: {err:#}"),
    }

    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
