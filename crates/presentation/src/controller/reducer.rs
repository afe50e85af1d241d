//! Pure state transitions for the recipe list screen.

use shared::{DataState, FoodCategory, GenericMessageInfo, RecipeListData};

use crate::state::RecipeListState;

pub const INVALID_EVENT_TITLE: &str = "Invalid Event";
pub const INVALID_EVENT_DESCRIPTION: &str = "Something went wrong.";

pub fn update_query(state: &RecipeListState, query: String) -> RecipeListState {
    RecipeListState {
        query,
        ..state.clone()
    }
}

/// A category chip starts a fresh search for the category's canonical value.
pub fn select_category(state: &RecipeListState, category: FoodCategory) -> RecipeListState {
    RecipeListState {
        selected_category: Some(category),
        query: category.value().to_string(),
        ..reset_for_new_search(state)
    }
}

pub fn next_page(state: &RecipeListState) -> RecipeListState {
    RecipeListState {
        page: state.page + 1,
        ..state.clone()
    }
}

pub fn reset_for_new_search(state: &RecipeListState) -> RecipeListState {
    RecipeListState {
        page: 1,
        recipes: Vec::new(),
        ..state.clone()
    }
}

/// Folds one search snapshot into the state: loading flag always, recipes
/// when present (replacing the list), message when present (appended).
pub fn apply_snapshot(
    state: &RecipeListState,
    snapshot: DataState<RecipeListData>,
) -> RecipeListState {
    let mut next = state.clone();
    next.is_loading = snapshot.is_loading;
    if let Some(data) = snapshot.data {
        next.recipes = data.recipes;
    }
    if let Some(message) = snapshot.message {
        next.queue.push(message);
    }
    next
}

pub fn push_message(state: &RecipeListState, message: GenericMessageInfo) -> RecipeListState {
    let mut next = state.clone();
    next.queue.push(message);
    next
}

pub fn remove_head_message(state: &RecipeListState) -> RecipeListState {
    let mut next = state.clone();
    next.queue.poll();
    next
}

/// Page and query a search started from `state` must use.
pub fn search_key(state: &RecipeListState) -> (u32, String) {
    (state.page, state.query.clone())
}

pub fn invalid_event_message() -> GenericMessageInfo {
    GenericMessageInfo::error_dialog(INVALID_EVENT_TITLE, INVALID_EVENT_DESCRIPTION)
}
