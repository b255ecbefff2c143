use chrono::Utc;
use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_core_site_impl::SiteFeatureConfig;
use folio_di::provider;
use folio_email_impl::ResendEmailServiceConfig;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        ..config: ConfigProvider {
            // Email
            ResendEmailServiceConfig,

            // Core
            ContactFeatureConfig,
            SiteFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self {
            _cache: Default::default(),
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // Email
        resend_email_service_config: ResendEmailServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        site_feature_config: SiteFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        // Email
        let resend_email_service_config = email_config(config);

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.email.clone().into(),
            timezone: config.contact.timezone,
        };

        let site_feature_config = SiteFeatureConfig {
            started_at: Utc::now(),
        };

        Self {
            _cache: Default::default(),

            // Email
            resend_email_service_config,

            // Core
            contact_feature_config,
            site_feature_config,
        }
    }
}

pub fn email_config(config: &Config) -> ResendEmailServiceConfig {
    ResendEmailServiceConfig {
        api_endpoint: config.email.api_endpoint.clone().into(),
        api_key: config.email.api_key.clone().into(),
        from: config.email.from.clone().into(),
    }
}
