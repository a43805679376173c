pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod search_bar;
pub mod sources;
pub mod state;
pub mod voice;

// UniFFI bindings for mobile platforms
pub mod uniffi_bindings;

pub use builder::{RecipeFinder, RecipeFinderBuilder, SourceKind};
pub use config::FinderConfig;
pub use error::{SearchError, VoiceError};
pub use model::{Ingredient, Recipe, RecipeStep, RecipeView};
pub use search_bar::SearchBar;
pub use sources::RecipeSource;
pub use state::{SearchState, SearchStatus};
pub use voice::{EngineEvent, SpeechEngine, VoiceInput, VoiceState};

/// Search the built-in sample set
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_finder::search_sample("salmon").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_sample(query: &str) -> Result<Vec<Recipe>, SearchError> {
    RecipeFinder::builder().query(query).sample().build().await
}

/// Search the remote recipe API using `config.toml` and environment settings
pub async fn search_remote(query: &str) -> Result<Vec<Recipe>, SearchError> {
    let config = FinderConfig::load()?;
    RecipeFinder::builder()
        .query(query)
        .remote()
        .config(config)
        .build()
        .await
}
