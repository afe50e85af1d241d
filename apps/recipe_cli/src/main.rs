use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use presentation::{CatalogSearch, InMemoryCatalog, RecipeListController, RecipeListState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod catalog;
mod commands;
mod config;

use commands::{parse_command, Command, HELP};
use config::{load_settings, DEFAULT_CONFIG_PATH};

/// Drive the recipe list screen from the terminal.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// JSON array of recipes; the built-in sample is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<usize>,
    #[arg(long)]
    query: Option<String>,
    #[arg(long)]
    no_initial_load: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(path) = args.catalog {
        settings.catalog_path = Some(path);
    }
    if let Some(page_size) = args.page_size {
        settings.page_size = page_size;
    }
    if let Some(query) = args.query {
        settings.initial_query = query;
    }
    if args.no_initial_load {
        settings.load_on_start = false;
    }

    let recipes = match &settings.catalog_path {
        Some(path) => catalog::load_catalog_file(path)?,
        None => catalog::sample_catalog(),
    };
    let mut recipe_catalog = InMemoryCatalog::new(recipes, settings.page_size);
    if let Some(latency) = settings.latency() {
        recipe_catalog = recipe_catalog.with_latency(latency);
    }
    info!(
        recipes = recipe_catalog.len(),
        page_size = recipe_catalog.page_size(),
        catalog = ?settings.catalog_path,
        "recipe catalog ready"
    );

    let search = Arc::new(CatalogSearch::new(Arc::new(recipe_catalog)));
    let controller = RecipeListController::new(search, settings.controller_settings())
        .context("failed to start recipe list controller")?;

    let mut states = controller.state_stream();
    let renderer = tokio::spawn(async move {
        while let Some(state) = states.next().await {
            println!("{}", render(&state));
        }
    });

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Dispatch(event)) => controller.handle(event),
            Some(Command::PrintState) => {
                println!("{}", serde_json::to_string_pretty(&controller.state())?);
            }
            Some(Command::Help) => println!("{HELP}"),
            Some(Command::Quit) => break,
            None => {}
        }
    }

    controller.close();
    drop(controller);
    renderer.await.context("state renderer panicked")?;
    info!("recipe list closed");
    Ok(())
}

fn render(state: &RecipeListState) -> String {
    let mut out = format!(
        "[page {} | query '{}' | category {} | {} recipes{}]",
        state.page,
        state.query,
        state
            .selected_category
            .map(|c| c.value())
            .unwrap_or("-"),
        state.recipes.len(),
        if state.is_loading { " | loading" } else { "" },
    );
    for recipe in state.recipes.iter().take(5) {
        out.push_str(&format!("\n  #{} {} ({})", recipe.id.0, recipe.title, recipe.rating));
    }
    if state.recipes.len() > 5 {
        out.push_str(&format!("\n  ... {} more", state.recipes.len() - 5));
    }
    if let Some(message) = state.queue.peek() {
        out.push_str(&format!(
            "\n  ! {}: {} ({} queued, 'dismiss' to clear)",
            message.title,
            message.description.as_deref().unwrap_or(""),
            state.queue.len()
        ));
    }
    out
}
