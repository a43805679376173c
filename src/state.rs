use crate::config::FinderConfig;
use crate::error::SearchError;
use crate::model::{Recipe, RecipeView};
use crate::sources::{RecipeSource, SourceFactory};
use log::{error, info};
use std::time::Duration;
use tokio::time::timeout;

/// What the results area should say right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing submitted yet
    Idle,
    Searching,
    Found(usize),
    NoResults,
}

impl SearchStatus {
    pub fn headline(&self) -> String {
        match self {
            SearchStatus::Idle => String::new(),
            SearchStatus::Searching => "Searching recipes...".to_string(),
            SearchStatus::Found(n) => format!("Found {} recipes", n),
            SearchStatus::NoResults => "No recipes found".to_string(),
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SearchStatus::Idle => "",
            SearchStatus::Searching => "Just a moment while we find the best recipes for you",
            SearchStatus::Found(_) => "Click on any recipe to see details",
            SearchStatus::NoResults => "Try searching for different ingredients",
        }
    }
}

/// Search, result and selection state behind the recipe UI.
///
/// Searching never fails: errors and timeouts are logged and leave an empty
/// result list. `search` takes `&mut self`, so two searches can never race
/// on the same state.
pub struct SearchState {
    source: Box<dyn RecipeSource>,
    timeout: Duration,
    max_results: usize,
    loading: bool,
    has_searched: bool,
    results: Vec<Recipe>,
    selected: Option<Recipe>,
    current_view: RecipeView,
}

impl SearchState {
    pub fn new(source: Box<dyn RecipeSource>) -> Self {
        SearchState {
            source,
            timeout: Duration::from_secs(30),
            max_results: 5,
            loading: false,
            has_searched: false,
            results: Vec::new(),
            selected: None,
            current_view: RecipeView::default(),
        }
    }

    /// Build the state around the source named in the configuration
    pub fn from_config(config: &FinderConfig) -> Result<Self, SearchError> {
        let source = SourceFactory::get_default_source(config)?;
        Ok(Self::new(source)
            .with_timeout(Duration::from_secs(config.search.timeout))
            .with_max_results(config.search.max_results))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Run a search. Blank queries are ignored and return `false`.
    pub async fn search(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.loading = true;
        self.has_searched = true;

        let outcome = match timeout(self.timeout, self.source.search(query)).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout(self.timeout)),
        };

        self.results = match outcome {
            Ok(recipes) => {
                info!(
                    "{} source returned {} recipes for '{}'",
                    self.source.source_name(),
                    recipes.len(),
                    query
                );
                recipes
            }
            Err(e) => {
                error!("Error searching recipes: {}", e);
                Vec::new()
            }
        };
        self.loading = false;
        true
    }

    pub fn select(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
        self.current_view = RecipeView::Overview;
    }

    /// Select the n-th visible result; returns false when out of range
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.visible_results().get(index).cloned() {
            Some(recipe) => {
                self.select(recipe);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn change_view(&mut self, view: RecipeView) {
        self.current_view = view;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// The results shown as cards, capped at `max_results`
    pub fn visible_results(&self) -> &[Recipe] {
        let end = self.results.len().min(self.max_results);
        &self.results[..end]
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn current_view(&self) -> RecipeView {
        self.current_view
    }

    pub fn status(&self) -> SearchStatus {
        if self.loading {
            SearchStatus::Searching
        } else if !self.has_searched {
            SearchStatus::Idle
        } else if self.results.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Found(self.results.len())
        }
    }
}
