use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_site_impl::SiteFeatureServiceImpl;
use folio_email_impl::ResendEmailServiceImpl;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<SiteFeature, ContactFeature>;

// Email
pub type Email = ResendEmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type SiteFeature = SiteFeatureServiceImpl;

pub type ContactFeature = ContactFeatureServiceImpl<Time, Template, Email>;
