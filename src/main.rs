use clap::Parser;
use log::debug;
use recipe_finder::{render, FinderConfig, RecipeView, SearchBar, SearchState, SearchStatus};

/// Search recipes by ingredient or dish name
#[derive(Parser, Debug)]
#[command(name = "recipe-finder", version, about)]
struct Args {
    /// Ingredients or recipe name to look for
    #[arg(required = true)]
    query: Vec<String>,

    /// Recipe source: "sample" or "remote" (overrides config)
    #[arg(long)]
    source: Option<String>,

    /// Open the n-th result (1-based) in the detail view
    #[arg(long)]
    select: Option<usize>,

    /// Detail view to show for the selected recipe
    #[arg(long, default_value = "overview")]
    view: RecipeView,

    /// Print the results as JSON instead of cards
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = FinderConfig::load()?;
    if let Some(source) = args.source {
        config.search.source = source;
    }
    debug!("Using {} source", config.search.source);

    let mut bar = SearchBar::new();
    bar.set_query(args.query.join(" "));
    let Some(query) = bar.submit() else {
        return Err("Please provide a search query".into());
    };

    let mut state = SearchState::from_config(&config)?;
    state.search(&query).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(state.visible_results())?);
        return Ok(());
    }

    let status = state.status();
    println!("{}", status.headline());
    println!("{}\n", status.hint());

    if let SearchStatus::Found(_) = status {
        for (index, recipe) in state.visible_results().iter().enumerate() {
            println!("{}. {}\n", index + 1, render::card(recipe));
        }
    }

    if let Some(n) = args.select {
        if n == 0 || !state.select_index(n - 1) {
            return Err(format!("No result number {}", n).into());
        }
        state.change_view(args.view);
        if let Some(recipe) = state.selected() {
            println!("{}", render::detail(recipe, state.current_view()));
        }
    }

    Ok(())
}
