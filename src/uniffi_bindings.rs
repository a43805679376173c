//! UniFFI bindings for recipe-finder
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{Ingredient, Recipe, RecipeStep, RecipeView, SearchError, SourceKind};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub amount: String,
    /// Empty string if none
    pub unit: String,
}

/// FFI-compatible numbered step
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiStep {
    pub number: u32,
    pub text: String,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<FfiIngredient>,
    pub steps: Vec<FfiStep>,
    /// Empty string if none
    pub video: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub calories: u32,
    pub tags: Vec<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            image: recipe.image,
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(|i| FfiIngredient {
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit.unwrap_or_default(),
                })
                .collect(),
            steps: recipe
                .steps
                .into_iter()
                .map(|s| FfiStep {
                    number: s.number,
                    text: s.text,
                })
                .collect(),
            video: recipe.video.unwrap_or_default(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            calories: recipe.calories,
            tags: recipe.tags,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            id: ffi.id,
            name: ffi.name,
            description: ffi.description,
            image: ffi.image,
            ingredients: ffi
                .ingredients
                .into_iter()
                .map(|i| Ingredient {
                    name: i.name,
                    amount: i.amount,
                    unit: if i.unit.is_empty() { None } else { Some(i.unit) },
                })
                .collect(),
            steps: ffi
                .steps
                .into_iter()
                .map(|s| RecipeStep {
                    number: s.number,
                    text: s.text,
                })
                .collect(),
            video: if ffi.video.is_empty() {
                None
            } else {
                Some(ffi.video)
            },
            prep_time: ffi.prep_time,
            cook_time: ffi.cook_time,
            servings: ffi.servings,
            calories: ffi.calories,
            tags: ffi.tags,
        }
    }
}

/// FFI-compatible source selector
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSourceKind {
    Sample,
    Remote,
}

impl From<FfiSourceKind> for SourceKind {
    fn from(kind: FfiSourceKind) -> Self {
        match kind {
            FfiSourceKind::Sample => SourceKind::Sample,
            FfiSourceKind::Remote => SourceKind::Remote,
        }
    }
}

/// FFI-compatible detail view selector
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiRecipeView {
    Overview,
    Ingredients,
    Instructions,
    Video,
}

impl From<FfiRecipeView> for RecipeView {
    fn from(view: FfiRecipeView) -> Self {
        match view {
            FfiRecipeView::Overview => RecipeView::Overview,
            FfiRecipeView::Ingredients => RecipeView::Ingredients,
            FfiRecipeView::Instructions => RecipeView::Instructions,
            FfiRecipeView::Video => RecipeView::Video,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiSearchError {
    /// HTTP request failed
    FetchError { message: String },
    /// Payload could not be read
    ParseError { message: String },
    /// The search did not finish in time
    Timeout { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiSearchError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiSearchError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiSearchError::Timeout { message } => write!(f, "Timeout: {}", message),
            FfiSearchError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiSearchError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiSearchError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiSearchError {}

impl From<SearchError> for FfiSearchError {
    fn from(err: SearchError) -> Self {
        let message = err.to_string();
        match err {
            SearchError::FetchError(_) => FfiSearchError::FetchError { message },
            SearchError::ParseError(_) => FfiSearchError::ParseError { message },
            SearchError::Timeout(_) => FfiSearchError::Timeout { message },
            SearchError::BuilderError(_) => FfiSearchError::InvalidInput { message },
            SearchError::ConfigError(_) | SearchError::LoadError(_) => {
                FfiSearchError::ConfigError { message }
            }
        }
    }
}

/// Options for a search call
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchConfig {
    /// Source to query (uses configuration default if not specified)
    pub source: Option<FfiSourceKind>,
    /// Optional API key (uses environment variable if not specified)
    pub api_key: Option<String>,
    /// Optional base URL of the remote API
    pub base_url: Option<String>,
    /// Optional timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Optional cap on returned recipes
    pub limit: Option<u32>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiSearchError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiSearchError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Search for recipes
///
/// # Arguments
/// * `query` - Free-text query (ingredients or dish names)
/// * `config` - Optional search options
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    query: String,
    config: Option<FfiSearchConfig>,
) -> Result<Vec<FfiRecipe>, FfiSearchError> {
    let config = config.unwrap_or_default();
    let rt = create_runtime()?;
    rt.block_on(async {
        let mut builder = crate::RecipeFinder::builder()
            .query(query)
            .config(crate::FinderConfig::load().unwrap_or_default());

        if let Some(source) = config.source {
            builder = builder.source(source.into());
        }
        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = config.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(limit) = config.limit {
            builder = builder.limit(limit as usize);
        }

        let recipes = builder.build().await?;
        Ok(recipes.into_iter().map(FfiRecipe::from).collect())
    })
}

/// The built-in sample recipes
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn sample_recipes() -> Vec<FfiRecipe> {
    crate::sources::sample_recipes()
        .into_iter()
        .map(FfiRecipe::from)
        .collect()
}

/// Render one detail view of a recipe as plain text
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_detail(recipe: FfiRecipe, view: FfiRecipeView) -> String {
    crate::render::detail(&recipe.into(), view.into())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if the remote source has an API key available
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_remote_available() -> bool {
    crate::FinderConfig::load()
        .map(|c| c.remote.resolve_api_key().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = crate::sources::sample_recipes().remove(0);

        let ffi_recipe: FfiRecipe = recipe.clone().into();
        assert_eq!(ffi_recipe.name, "Avocado Toast with Poached Egg");
        assert_eq!(ffi_recipe.ingredients[0].unit, "slices");
        assert_eq!(ffi_recipe.ingredients[1].unit, "");
        assert_eq!(ffi_recipe.steps.len(), 9);

        let back: Recipe = ffi_recipe.into();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_search_sample_via_ffi() {
        let config = FfiSearchConfig {
            source: Some(FfiSourceKind::Sample),
            ..Default::default()
        };
        let recipes = search_recipes("risotto".to_string(), Some(config)).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "3");
    }

    #[test]
    fn test_blank_query_is_invalid_input() {
        let config = FfiSearchConfig {
            source: Some(FfiSourceKind::Sample),
            ..Default::default()
        };
        let result = search_recipes("  ".to_string(), Some(config));
        assert!(matches!(result, Err(FfiSearchError::InvalidInput { .. })));
    }

    #[test]
    fn test_render_detail() {
        let recipe = sample_recipes().remove(1);
        let text = render_detail(recipe, FfiRecipeView::Video);
        assert_eq!(text, "Video: https://example.com/maple-salmon-video\n");
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
