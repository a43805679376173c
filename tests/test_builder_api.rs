use recipe_finder::{search_sample, FinderConfig, RecipeFinder, SearchError, SourceKind};

#[tokio::test]
async fn test_builder_sample_search() {
    let recipes = RecipeFinder::builder()
        .query("vegetarian")
        .sample()
        .build()
        .await
        .unwrap();

    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Avocado Toast with Poached Egg", "Creamy Mushroom Risotto"]
    );
}

#[tokio::test]
async fn test_builder_trims_query() {
    let recipes = RecipeFinder::builder()
        .query("  Salmon  ")
        .source(SourceKind::Sample)
        .build()
        .await
        .unwrap();
    assert_eq!(recipes.len(), 1);
}

#[tokio::test]
async fn test_builder_without_query() {
    let result = RecipeFinder::builder().sample().build().await;
    match result {
        Err(SearchError::BuilderError(msg)) => assert!(msg.contains("No query")),
        other => panic!("Expected BuilderError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_builder_blank_query() {
    let result = RecipeFinder::builder().query("   ").sample().build().await;
    assert!(matches!(result, Err(SearchError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_limit() {
    let recipes = RecipeFinder::builder()
        .query("olive")
        .sample()
        .limit(2)
        .build()
        .await
        .unwrap();
    assert_eq!(recipes.len(), 2);
}

#[tokio::test]
async fn test_builder_remote_without_api_key() {
    std::env::remove_var("SPOONACULAR_API_KEY");
    let result = RecipeFinder::builder()
        .query("chicken")
        .remote()
        .build()
        .await;
    assert!(matches!(result, Err(SearchError::ConfigError(_))));
}

#[tokio::test]
async fn test_builder_unknown_configured_source() {
    let mut config = FinderConfig::default();
    config.search.source = "pantry".to_string();

    let result = RecipeFinder::builder()
        .query("eggs")
        .config(config)
        .build()
        .await;
    assert!(matches!(result, Err(SearchError::ConfigError(_))));
}

#[tokio::test]
async fn test_convenience_search_sample() {
    let recipes = search_sample("parmesan").await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, "3");
}

/// Hits the real recipe API; needs SPOONACULAR_API_KEY
#[tokio::test]
#[ignore]
async fn test_builder_real_remote_search() {
    let recipes = recipe_finder::search_remote("chicken").await.unwrap();
    assert!(!recipes.is_empty());
    assert!(recipes.iter().all(|r| !r.name.is_empty()));
}
