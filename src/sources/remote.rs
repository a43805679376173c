use crate::config::RemoteConfig;
use crate::error::SearchError;
use crate::model::{Ingredient, Recipe};
use crate::sources::summary::{parse_calories, parse_ready_minutes, strip_html};
use crate::sources::RecipeSource;
use async_trait::async_trait;
use html_escape::decode_html_entities;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Two-step lookup against a Spoonacular-compatible recipe API:
/// an ingredient search for candidates, then one detail fetch per candidate.
pub struct RemoteSource {
    client: Client,
    api_key: String,
    base_url: String,
    number: u32,
}

/// Entry returned by the ingredient search
#[derive(Debug, Deserialize)]
struct Candidate {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: Option<String>,
}

/// Detail payload; the API leaves most fields null when unknown
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformation {
    title: Option<String>,
    image: Option<String>,
    servings: Option<u32>,
    summary: Option<String>,
    ready_in_minutes: Option<i64>,
    preparation_minutes: Option<i64>,
    cooking_minutes: Option<i64>,
    #[serde(default)]
    extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    analyzed_instructions: Vec<InstructionSection>,
    #[serde(default)]
    dish_types: Vec<String>,
    #[serde(default)]
    diets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ExtendedIngredient {
    #[serde(default)]
    name: String,
    #[serde(default)]
    original: String,
    amount: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstructionSection {
    #[serde(default)]
    steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
struct InstructionStep {
    #[serde(default)]
    step: String,
}

impl RemoteSource {
    /// Create a remote source from configuration
    pub fn new(config: &RemoteConfig, timeout: Duration) -> Result<Self, SearchError> {
        // Try config first, then fall back to environment variable
        let api_key = config.resolve_api_key().ok_or_else(|| {
            SearchError::ConfigError(
                "SPOONACULAR_API_KEY not found in config or environment".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(RemoteSource {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            number: config.number,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        RemoteSource {
            client: Client::new(),
            api_key,
            base_url,
            number: 5,
        }
    }

    async fn find_by_ingredients(&self, query: &str) -> Result<Vec<Candidate>, SearchError> {
        let number = self.number.to_string();
        let response = self
            .client
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&[
                ("ingredients", query),
                ("number", number.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let candidates: Vec<Candidate> = serde_json::from_str(&body)?;
        Ok(candidates)
    }

    async fn fetch_information(&self, id: u64) -> Result<RecipeInformation, SearchError> {
        let response = self
            .client
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[
                ("includeNutrition", "false"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("Detail payload for {}: {} bytes", id, body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for RemoteSource {
    fn source_name(&self) -> &str {
        "remote"
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let candidates = self.find_by_ingredients(query).await?;
        info!(
            "Ingredient search for '{}' returned {} candidates",
            query,
            candidates.len()
        );

        // Details are awaited in candidate order so the returned list is complete
        let mut recipes = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let id = candidate.id;
            let mut recipe = candidate_to_recipe(candidate);
            match self.fetch_information(id).await {
                Ok(information) => apply_information(&mut recipe, information),
                Err(e) => warn!("Failed to fetch details for recipe {}: {}", id, e),
            }
            recipes.push(recipe);
        }

        Ok(recipes)
    }
}

fn candidate_to_recipe(candidate: Candidate) -> Recipe {
    Recipe {
        id: candidate.id.to_string(),
        name: decode_html_entities(&candidate.title).into_owned(),
        image: candidate.image.unwrap_or_default(),
        ..Default::default()
    }
}

fn apply_information(recipe: &mut Recipe, information: RecipeInformation) {
    if recipe.name.is_empty() {
        if let Some(title) = information.title {
            recipe.name = decode_html_entities(&title).into_owned();
        }
    }
    if recipe.image.is_empty() {
        recipe.image = information.image.unwrap_or_default();
    }

    let summary = information.summary.unwrap_or_default();
    recipe.description = strip_html(&summary);
    recipe.calories = parse_calories(&summary).unwrap_or(0);

    let total = parse_ready_minutes(&summary)
        .or_else(|| positive_minutes(information.ready_in_minutes))
        .unwrap_or(0);
    recipe.prep_time = positive_minutes(information.preparation_minutes).unwrap_or(0);
    recipe.cook_time = positive_minutes(information.cooking_minutes)
        .unwrap_or_else(|| total.saturating_sub(recipe.prep_time));
    recipe.servings = information.servings.unwrap_or(0);

    recipe.ingredients = information
        .extended_ingredients
        .into_iter()
        .map(|ingredient| {
            let name = if ingredient.name.trim().is_empty() {
                ingredient.original
            } else {
                ingredient.name
            };
            Ingredient {
                name,
                amount: ingredient.amount.map(format_amount).unwrap_or_default(),
                unit: ingredient.unit.filter(|u| !u.trim().is_empty()),
            }
        })
        .collect();

    recipe.set_steps(
        information
            .analyzed_instructions
            .into_iter()
            .flat_map(|section| section.steps)
            .map(|step| step.step)
            .filter(|text| !text.trim().is_empty()),
    );

    let mut tags: Vec<String> = Vec::new();
    for tag in information.dish_types.into_iter().chain(information.diets) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    recipe.tags = tags;
}

/// The API reports unknown durations as -1
fn positive_minutes(value: Option<i64>) -> Option<u32> {
    value
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
}

fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < 1e-9 {
        format!("{}", amount as i64)
    } else {
        let rounded = format!("{:.2}", amount);
        rounded.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
