use crate::config::FinderConfig;
use crate::error::SearchError;
use crate::sources::{RecipeSource, RemoteSource, SampleSource};
use std::time::Duration;

pub struct SourceFactory;

impl SourceFactory {
    /// Create a source instance by name
    pub fn create(
        source_name: &str,
        config: &FinderConfig,
    ) -> Result<Box<dyn RecipeSource>, SearchError> {
        match source_name {
            "sample" => Ok(Box::new(SampleSource::new().with_latency(
                Duration::from_millis(config.search.sample_latency_ms),
            ))),
            "remote" => Ok(Box::new(RemoteSource::new(
                &config.remote,
                Duration::from_secs(config.search.timeout),
            )?)),
            _ => Err(SearchError::ConfigError(format!(
                "Unknown recipe source: {}",
                source_name
            ))),
        }
    }

    /// Get the source named in `search.source`
    pub fn get_default_source(config: &FinderConfig) -> Result<Box<dyn RecipeSource>, SearchError> {
        Self::create(&config.search.source, config)
    }

    /// List all available source names
    pub fn available_sources() -> Vec<&'static str> {
        vec!["sample", "remote"]
    }
}
