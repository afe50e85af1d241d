use std::{fs, path::Path};

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use shared::{FoodCategory, Recipe, RecipeId};

const SAMPLE_STYLES: [&str; 6] = ["Classic", "Spicy", "Quick", "Grandma's", "Smoky", "Weeknight"];

/// Reads a JSON array of recipes.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<Vec<Recipe>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog '{}'", path.display()))
}

/// Built-in catalog used when no file is configured: a handful of recipes
/// for every food category.
pub fn sample_catalog() -> Vec<Recipe> {
    let epoch: DateTime<Utc> = DateTime::UNIX_EPOCH + Duration::days(18_750);

    FoodCategory::all()
        .iter()
        .flat_map(|category| SAMPLE_STYLES.iter().map(move |style| (*category, *style)))
        .enumerate()
        .map(|(index, (category, style))| {
            let id = index as i64 + 1;
            let added = epoch + Duration::hours(id);
            Recipe {
                id: RecipeId(id),
                title: format!("{style} {category}"),
                publisher: "sample kitchen".to_string(),
                featured_image: format!("https://images.example/recipes/{id}.jpg"),
                rating: 40 + (id as i32 * 7) % 60,
                source_url: format!("https://recipes.example/{id}"),
                ingredients: vec![
                    category.value().to_lowercase(),
                    "salt".to_string(),
                    "pepper".to_string(),
                ],
                date_added: added,
                date_updated: added,
            }
        })
        .collect()
}
