use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiSite {
    /// When the site was last deployed
    pub last_updated: DateTime<Utc>,
}
