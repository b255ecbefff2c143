use chrono::{DateTime, Utc};
use folio_core_site_contracts::SiteFeatureService;
use folio_di::Build;
use folio_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct SiteFeatureServiceImpl {
    config: SiteFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct SiteFeatureConfig {
    /// Captured once when the server starts
    pub started_at: DateTime<Utc>,
}

impl SiteFeatureService for SiteFeatureServiceImpl {
    #[trace_instrument(skip(self))]
    fn last_updated(&self) -> DateTime<Utc> {
        self.config.started_at
    }
}

#[cfg(test)]
mod tests {
    use folio_demo::NOW;

    use super::*;

    #[test]
    fn last_updated() {
        // Arrange
        let sut = SiteFeatureServiceImpl {
            config: SiteFeatureConfig { started_at: *NOW },
        };

        // Act
        let first = sut.last_updated();
        let second = sut.last_updated();

        // Assert
        assert_eq!(first, *NOW);
        assert_eq!(second, *NOW);
    }
}
