use chrono::{DateTime, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SiteFeatureService: Send + Sync + 'static {
    /// Return the time at which the currently deployed version of the site
    /// went live.
    fn last_updated(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockSiteFeatureService {
    pub fn with_last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.expect_last_updated()
            .once()
            .return_const(last_updated);
        self
    }
}
