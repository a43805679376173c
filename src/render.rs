//! Plain-text rendering of result cards and detail views.

use crate::model::{Recipe, RecipeView};

/// One result card: name, blurb, up to three tags and the headline figures
pub fn card(recipe: &Recipe) -> String {
    let mut out = format!("{}\n  {}\n", recipe.name, recipe.description);
    if !recipe.tags.is_empty() {
        let tags: Vec<&str> = recipe.tags.iter().take(3).map(String::as_str).collect();
        out.push_str(&format!("  [{}]\n", tags.join("] [")));
    }
    out.push_str(&format!(
        "  {} min | {} cal | {} servings",
        recipe.total_time(),
        recipe.calories,
        recipe.servings
    ));
    out
}

pub fn detail(recipe: &Recipe, view: RecipeView) -> String {
    match view {
        RecipeView::Overview => overview(recipe),
        RecipeView::Ingredients => ingredients(recipe),
        RecipeView::Instructions => instructions(recipe),
        RecipeView::Video => video(recipe),
    }
}

fn overview(recipe: &Recipe) -> String {
    let mut out = format!("{}\n\n{}\n", recipe.name, recipe.description);
    if !recipe.tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", recipe.tags.join(", ")));
    }
    out.push_str(&format!(
        "\nPrep: {} min\nCook: {} min\nServings: {}\nCalories: {} kcal\n",
        recipe.prep_time, recipe.cook_time, recipe.servings, recipe.calories
    ));
    if !recipe.image.is_empty() {
        out.push_str(&format!("Image: {}\n", recipe.image));
    }
    out
}

fn ingredients(recipe: &Recipe) -> String {
    if recipe.ingredients.is_empty() {
        return "No ingredients listed.\n".to_string();
    }
    let mut out = String::from("Ingredients\n");
    for ingredient in &recipe.ingredients {
        let quantity = match &ingredient.unit {
            Some(unit) => format!("{} {}", ingredient.amount, unit),
            None => ingredient.amount.clone(),
        };
        out.push_str(&format!("- {}: {}\n", ingredient.name, quantity.trim()));
    }
    out
}

fn instructions(recipe: &Recipe) -> String {
    if recipe.steps.is_empty() {
        return "No instructions available.\n".to_string();
    }
    let mut out = String::from("Instructions\n");
    for step in &recipe.steps {
        out.push_str(&format!("{}. {}\n", step.number, step.text));
    }
    out
}

fn video(recipe: &Recipe) -> String {
    match &recipe.video {
        Some(url) if !url.is_empty() => format!("Video: {}\n", url),
        _ => "No video available for this recipe.\n".to_string(),
    }
}
