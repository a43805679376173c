use std::time::Duration;

use log::debug;
use tokio::time::timeout;

use crate::config::{FinderConfig, RemoteConfig};
use crate::sources::{RecipeSource, RemoteSource, SampleSource};
use crate::{Recipe, SearchError};

/// Which recipe source the builder queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in sample set (default)
    #[default]
    Sample,
    /// Remote recipe API
    Remote,
}

impl SourceKind {
    fn from_name(name: &str) -> Result<Self, SearchError> {
        match name {
            "sample" => Ok(SourceKind::Sample),
            "remote" => Ok(SourceKind::Remote),
            other => Err(SearchError::ConfigError(format!(
                "Unknown recipe source: {}",
                other
            ))),
        }
    }
}

/// Builder for configuring and executing a single recipe search.
///
/// Unlike [`crate::SearchState`], the builder reports failures to the caller.
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    query: Option<String>,
    source: Option<SourceKind>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    base_url: Option<String>,
    limit: Option<usize>,
    config: Option<FinderConfig>,
}

impl RecipeFinderBuilder {
    /// Set the free-text query
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().query("salmon");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Search the built-in sample set
    pub fn sample(mut self) -> Self {
        self.source = Some(SourceKind::Sample);
        self
    }

    /// Search the remote recipe API
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .query("chicken")
    ///     .remote()
    ///     .api_key("your-api-key");
    /// ```
    pub fn remote(mut self) -> Self {
        self.source = Some(SourceKind::Remote);
        self
    }

    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = Some(source);
        self
    }

    /// Upper bound for the whole search
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .query("risotto")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// API key for the remote source, instead of config or environment
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Base URL for the remote source (proxies, test servers)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Keep at most this many recipes
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start from an already loaded configuration
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and execute the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No query, or a blank query, was given
    /// - The remote source has no API key
    /// - The HTTP request fails or the payload cannot be read
    /// - The search exceeds the timeout
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipes = RecipeFinder::builder()
    ///     .query("avocado")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<Recipe>, SearchError> {
        let query = self.query.ok_or_else(|| {
            SearchError::BuilderError("No query specified. Use .query()".to_string())
        })?;
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::BuilderError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let config = self.config.unwrap_or_default();
        let kind = match self.source {
            Some(kind) => kind,
            None => SourceKind::from_name(&config.search.source)?,
        };
        let limit = self.limit.unwrap_or(usize::MAX);
        let duration = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.search.timeout));

        let source: Box<dyn RecipeSource> = match kind {
            SourceKind::Sample => Box::new(SampleSource::new()),
            SourceKind::Remote => {
                let remote = RemoteConfig {
                    api_key: self.api_key.or(config.remote.api_key.clone()),
                    base_url: self.base_url.unwrap_or(config.remote.base_url.clone()),
                    number: config.remote.number,
                };
                Box::new(RemoteSource::new(&remote, duration)?)
            }
        };

        debug!("Searching {} for '{}'", source.source_name(), query);
        let mut recipes = timeout(duration, source.search(query))
            .await
            .map_err(|_| SearchError::Timeout(duration))??;
        recipes.truncate(limit);
        Ok(recipes)
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
