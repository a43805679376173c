use crate::error::SearchError;
use crate::model::{Ingredient, Recipe};
use crate::sources::RecipeSource;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// In-memory source filtering a fixed recipe set
pub struct SampleSource {
    recipes: Vec<Recipe>,
    latency: Duration,
}

impl SampleSource {
    /// The built-in sample set, answering without delay
    pub fn new() -> Self {
        Self::with_recipes(sample_recipes())
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        SampleSource {
            recipes,
            latency: Duration::ZERO,
        }
    }

    /// Wait this long before answering, to mimic a network round trip
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeSource for SampleSource {
    fn source_name(&self) -> &str {
        "sample"
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        let needle = query.to_lowercase();
        let found: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.matches(&needle))
            .cloned()
            .collect();

        debug!("Sample search for '{}' matched {} recipes", query, found.len());
        Ok(found)
    }
}

/// The fixed sample recipe set
pub fn sample_recipes() -> Vec<Recipe> {
    let mut avocado_toast = Recipe {
        id: "1".to_string(),
        name: "Avocado Toast with Poached Egg".to_string(),
        description: "A simple yet delicious breakfast with creamy avocado and perfectly poached egg on toasted artisan bread.".to_string(),
        image: "https://images.unsplash.com/photo-1525351484163-7529414344d8?q=80&w=2080&auto=format&fit=crop".to_string(),
        ingredients: vec![
            Ingredient::new("Artisan bread", "2").with_unit("slices"),
            Ingredient::new("Ripe avocado", "1"),
            Ingredient::new("Eggs", "2"),
            Ingredient::new("Cherry tomatoes", "5"),
            Ingredient::new("Red pepper flakes", "1/4").with_unit("tsp"),
            Ingredient::new("Salt", "1/4").with_unit("tsp"),
            Ingredient::new("Black pepper", "1/4").with_unit("tsp"),
            Ingredient::new("Fresh lemon juice", "1").with_unit("tsp"),
            Ingredient::new("Extra virgin olive oil", "1").with_unit("tsp"),
        ],
        video: Some("https://example.com/avocado-toast-video".to_string()),
        prep_time: 10,
        cook_time: 5,
        servings: 2,
        calories: 320,
        tags: tags(&["breakfast", "healthy", "vegetarian", "quick"]),
        ..Default::default()
    };
    avocado_toast.set_steps([
        "Toast the bread slices until golden brown.",
        "Halve the avocado, remove the pit, and scoop the flesh into a bowl.",
        "Mash the avocado with a fork, add lemon juice, salt, and pepper.",
        "Bring a pot of water to a gentle simmer, add a splash of vinegar.",
        "Crack each egg into a small cup, then gently slide into the simmering water.",
        "Poach eggs for 3-4 minutes until whites are set but yolks are still runny.",
        "Spread mashed avocado on toasted bread.",
        "Top with poached eggs, halved cherry tomatoes, and red pepper flakes.",
        "Drizzle with olive oil and serve immediately.",
    ]);

    let mut salmon = Recipe {
        id: "2".to_string(),
        name: "Maple Glazed Salmon".to_string(),
        description: "Tender salmon fillets glazed with a sweet and savory maple sauce, perfect for a quick weeknight dinner.".to_string(),
        image: "https://images.unsplash.com/photo-1519708227418-c8fd9a32b7a2?q=80&w=2070&auto=format&fit=crop".to_string(),
        ingredients: vec![
            Ingredient::new("Salmon fillets", "4").with_unit("6 oz each"),
            Ingredient::new("Maple syrup", "1/4").with_unit("cup"),
            Ingredient::new("Soy sauce", "2").with_unit("tbsp"),
            Ingredient::new("Garlic", "2").with_unit("cloves, minced"),
            Ingredient::new("Fresh ginger", "1").with_unit("tbsp, grated"),
            Ingredient::new("Lemon", "1").with_unit("juiced"),
            Ingredient::new("Olive oil", "1").with_unit("tbsp"),
            Ingredient::new("Salt", "1/2").with_unit("tsp"),
            Ingredient::new("Black pepper", "1/4").with_unit("tsp"),
        ],
        video: Some("https://example.com/maple-salmon-video".to_string()),
        prep_time: 10,
        cook_time: 15,
        servings: 4,
        calories: 380,
        tags: tags(&["dinner", "seafood", "quick", "healthy"]),
        ..Default::default()
    };
    salmon.set_steps([
        "Preheat oven to 400°F (200°C).",
        "In a bowl, whisk together maple syrup, soy sauce, garlic, ginger, and lemon juice.",
        "Pat salmon fillets dry and place on a lined baking sheet.",
        "Season with salt and pepper, then brush with olive oil.",
        "Bake for 5 minutes, then remove from oven.",
        "Brush generously with maple glaze and return to oven.",
        "Bake for another 7-10 minutes until salmon is cooked through but still moist.",
        "Brush with remaining glaze before serving.",
    ]);

    let mut risotto = Recipe {
        id: "3".to_string(),
        name: "Creamy Mushroom Risotto".to_string(),
        description: "A rich and creamy Italian risotto with earthy mushrooms and freshly grated Parmesan cheese.".to_string(),
        image: "https://images.unsplash.com/photo-1476124369491-e7addf5db371?q=80&w=2070&auto=format&fit=crop".to_string(),
        ingredients: vec![
            Ingredient::new("Arborio rice", "1 1/2").with_unit("cups"),
            Ingredient::new("Mixed mushrooms", "8").with_unit("oz, sliced"),
            Ingredient::new("Onion", "1").with_unit("medium, finely chopped"),
            Ingredient::new("Garlic", "2").with_unit("cloves, minced"),
            Ingredient::new("White wine", "1/2").with_unit("cup"),
            Ingredient::new("Vegetable broth", "4").with_unit("cups, warm"),
            Ingredient::new("Parmesan cheese", "1/2").with_unit("cup, grated"),
            Ingredient::new("Butter", "2").with_unit("tbsp"),
            Ingredient::new("Olive oil", "2").with_unit("tbsp"),
            Ingredient::new("Fresh thyme", "1").with_unit("tsp, chopped"),
            Ingredient::new("Salt", "to taste"),
            Ingredient::new("Black pepper", "to taste"),
        ],
        video: Some("https://example.com/mushroom-risotto-video".to_string()),
        prep_time: 15,
        cook_time: 30,
        servings: 4,
        calories: 420,
        tags: tags(&["dinner", "italian", "vegetarian"]),
        ..Default::default()
    };
    risotto.set_steps([
        "In a large pan, heat 1 tbsp olive oil and sauté mushrooms until golden. Set aside.",
        "In the same pan, heat remaining oil and butter. Add onion and cook until translucent.",
        "Add garlic and cook for another minute until fragrant.",
        "Add Arborio rice and stir to coat with oil and butter. Toast for 1-2 minutes.",
        "Pour in white wine and stir until absorbed.",
        "Add warm broth one ladle at a time, stirring frequently. Wait until each addition is absorbed before adding more.",
        "Continue this process for about 18-20 minutes until rice is creamy and al dente.",
        "Stir in the sautéed mushrooms, Parmesan cheese, and thyme.",
        "Season with salt and pepper. Let rest for 2 minutes before serving.",
    ]);

    vec![avocado_toast, salmon, risotto]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_sample_set_steps_are_contiguous() {
        for recipe in sample_recipes() {
            for (i, step) in recipe.steps.iter().enumerate() {
                assert_eq!(step.number, i as u32 + 1, "{}", recipe.name);
            }
            assert!(!recipe.ingredients.is_empty());
        }
    }

    #[tokio::test]
    async fn test_search_by_tag() {
        let source = SampleSource::new();
        let found = source.search("Vegetarian").await.unwrap();
        assert_eq!(
            names(&found),
            vec!["Avocado Toast with Poached Egg", "Creamy Mushroom Risotto"]
        );
    }

    #[tokio::test]
    async fn test_search_by_ingredient() {
        let source = SampleSource::new();
        let found = source.search("maple syrup").await.unwrap();
        assert_eq!(names(&found), vec!["Maple Glazed Salmon"]);
    }

    #[tokio::test]
    async fn test_search_by_description() {
        let source = SampleSource::new();
        let found = source.search("weeknight").await.unwrap();
        assert_eq!(names(&found), vec!["Maple Glazed Salmon"]);
    }

    #[tokio::test]
    async fn test_no_match() {
        let source = SampleSource::new();
        assert!(source.search("zzz").await.unwrap().is_empty());
        assert!(source.search("chicken").await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let source = SampleSource::new().with_latency(Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        let found = source.search("garlic").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(found.len(), 2);
    }
}
