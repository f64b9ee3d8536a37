use crate::{Config, LookupError, LookupResult, source::http::HttpRecordSource};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

/// Something that can resolve a weather record identifier.
#[async_trait]
pub trait RecordSource: Send + Sync + Debug {
    async fn fetch(&self, identifier: &str) -> Result<LookupResult, LookupError>;
}

/// Construct the HTTP source pointing at the configured service.
pub fn source_from_config(config: &Config) -> HttpRecordSource {
    HttpRecordSource::new(config.base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_uses_configured_base_url() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://configured:8000/").expect("valid url");

        let source = source_from_config(&cfg);
        assert_eq!(source.lookup_url("abc"), "http://configured:8000/weather/abc");
    }

    #[test]
    fn default_config_points_at_localhost() {
        let source = source_from_config(&Config::default());
        assert_eq!(source.base_url(), "http://localhost:8000");
    }
}
