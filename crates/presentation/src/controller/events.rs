//! Events the recipe list UI sends to its controller.

use shared::FoodCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeListEvent {
    LoadRecipes,
    NewSearch,
    NextPage,
    SelectCategory(FoodCategory),
    UpdateQuery(String),
    /// The UI dismissed the message at the head of the queue.
    RemoveHeadMessage,
    /// Input the UI layer could not map to any known event.
    Unknown(String),
}

impl RecipeListEvent {
    pub fn name(&self) -> &str {
        match self {
            RecipeListEvent::LoadRecipes => "load_recipes",
            RecipeListEvent::NewSearch => "new_search",
            RecipeListEvent::NextPage => "next_page",
            RecipeListEvent::SelectCategory(_) => "select_category",
            RecipeListEvent::UpdateQuery(_) => "update_query",
            RecipeListEvent::RemoveHeadMessage => "remove_head_message",
            RecipeListEvent::Unknown(name) => name.as_str(),
        }
    }

    pub fn triggers_search(&self) -> bool {
        matches!(
            self,
            RecipeListEvent::LoadRecipes
                | RecipeListEvent::NewSearch
                | RecipeListEvent::NextPage
                | RecipeListEvent::SelectCategory(_)
        )
    }
}
