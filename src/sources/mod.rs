mod factory;
mod remote;
mod sample;
mod summary;

pub use factory::SourceFactory;
pub use remote::RemoteSource;
pub use sample::{sample_recipes, SampleSource};
pub use summary::{parse_calories, parse_ready_minutes, strip_html};

use crate::error::SearchError;
use crate::model::Recipe;
use async_trait::async_trait;

/// Unified trait for everything that can answer a recipe query
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "sample", "remote")
    fn source_name(&self) -> &str;

    /// Return the recipes matching `query`, or an empty list when none match
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError>;
}
