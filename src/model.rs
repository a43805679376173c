use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single ingredient line, e.g. `2 slices Artisan bread`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-form amount ("2", "1/4", "to taste")
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount: amount.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub number: u32,
    pub text: String,
}

/// Normalized recipe record shared by every recipe source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Minutes
    pub prep_time: u32,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    pub calories: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Prep plus cook minutes, saturating at `u32::MAX`
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Replace the steps, numbering them contiguously from 1.
    pub fn set_steps<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| RecipeStep {
                number: i as u32 + 1,
                text: text.into(),
            })
            .collect();
    }

    /// Case-insensitive match against name, description, ingredient names and tags.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Which part of a selected recipe the detail view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeView {
    #[default]
    Overview,
    Ingredients,
    Instructions,
    Video,
}

impl RecipeView {
    pub const ALL: [RecipeView; 4] = [
        RecipeView::Overview,
        RecipeView::Ingredients,
        RecipeView::Instructions,
        RecipeView::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeView::Overview => "overview",
            RecipeView::Ingredients => "ingredients",
            RecipeView::Instructions => "instructions",
            RecipeView::Video => "video",
        }
    }
}

impl fmt::Display for RecipeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "image" => Ok(RecipeView::Overview),
            "ingredients" => Ok(RecipeView::Ingredients),
            "instructions" | "recipe" | "steps" => Ok(RecipeView::Instructions),
            "video" => Ok(RecipeView::Video),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_steps_numbers_from_one() {
        let mut recipe = Recipe::default();
        recipe.set_steps(["Boil water", "Add pasta", "Drain"]);

        let numbers: Vec<u32> = recipe.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(recipe.steps[1].text, "Add pasta");
    }

    #[test]
    fn test_total_time() {
        let recipe = Recipe {
            prep_time: 10,
            cook_time: 25,
            ..Default::default()
        };
        assert_eq!(recipe.total_time(), 35);
    }

    #[test]
    fn test_total_time_saturates() {
        let recipe = Recipe {
            prep_time: 4_000_000_000,
            cook_time: 4_000_000_000,
            ..Default::default()
        };
        assert_eq!(recipe.total_time(), u32::MAX);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let recipe = Recipe {
            name: "Lemon Chicken".to_string(),
            ingredients: vec![Ingredient::new("Garlic", "2").with_unit("cloves")],
            tags: vec!["Dinner".to_string()],
            ..Default::default()
        };

        assert!(recipe.matches("chicken"));
        assert!(recipe.matches("garlic"));
        assert!(recipe.matches("dinner"));
        assert!(!recipe.matches("beef"));
    }

    #[test]
    fn test_view_parsing() {
        assert_eq!("Ingredients".parse::<RecipeView>(), Ok(RecipeView::Ingredients));
        assert_eq!("recipe".parse::<RecipeView>(), Ok(RecipeView::Instructions));
        assert_eq!("image".parse::<RecipeView>(), Ok(RecipeView::Overview));
        assert!("gallery".parse::<RecipeView>().is_err());
        assert_eq!(RecipeView::default(), RecipeView::Overview);
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: "7".to_string(),
            prep_time: 5,
            ..Default::default()
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], 5);
        assert!(json.get("video").is_none());
        assert!(json["steps"].as_array().unwrap().is_empty());
    }
}
