use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(RecipeId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub publisher: String,
    pub featured_image: String,
    pub rating: i32,
    pub source_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Recipe {
    /// Case-insensitive match against title, publisher and ingredients.
    /// An empty (or whitespace-only) query matches every recipe.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.publisher.to_lowercase().contains(&needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&needle))
    }
}

/// Category chips offered above the recipe list. Selecting one replaces the
/// search query with the category's canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Chicken,
    Beef,
    Soup,
    Dessert,
    Vegetarian,
    Milk,
    Vegan,
    Pizza,
    Donut,
}

impl FoodCategory {
    const ALL: [FoodCategory; 9] = [
        FoodCategory::Chicken,
        FoodCategory::Beef,
        FoodCategory::Soup,
        FoodCategory::Dessert,
        FoodCategory::Vegetarian,
        FoodCategory::Milk,
        FoodCategory::Vegan,
        FoodCategory::Pizza,
        FoodCategory::Donut,
    ];

    pub fn all() -> &'static [FoodCategory] {
        &Self::ALL
    }

    pub fn value(self) -> &'static str {
        match self {
            FoodCategory::Chicken => "Chicken",
            FoodCategory::Beef => "Beef",
            FoodCategory::Soup => "Soup",
            FoodCategory::Dessert => "Dessert",
            FoodCategory::Vegetarian => "Vegetarian",
            FoodCategory::Milk => "Milk",
            FoodCategory::Vegan => "Vegan",
            FoodCategory::Pizza => "Pizza",
            FoodCategory::Donut => "Donut",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for FoodCategory {
    type Err = SearchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.value().eq_ignore_ascii_case(raw))
            .ok_or_else(|| SearchError::UnknownCategory(raw.to_string()))
    }
}
