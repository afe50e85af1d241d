use serde::Serialize;
use shared::{FoodCategory, MessageQueue, Recipe};

/// Everything the recipe list screen renders. Published as whole snapshots;
/// observers never see a half-applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeListState {
    pub page: u32,
    pub query: String,
    pub selected_category: Option<FoodCategory>,
    pub recipes: Vec<Recipe>,
    pub is_loading: bool,
    pub queue: MessageQueue,
}

impl Default for RecipeListState {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
            selected_category: None,
            recipes: Vec::new(),
            is_loading: false,
            queue: MessageQueue::new(),
        }
    }
}

impl RecipeListState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}
