//! Drives one search and folds its snapshots into the screen state.

use futures::StreamExt;
use tracing::debug;

use crate::{
    controller::reducer, search::SearchRecipes, state::RecipeListState, store::StateStore,
};

/// Searches for `page`/`query`, which the caller captured atomically with the
/// transition that preceded the search. Snapshots are applied strictly in
/// emission order, one state replacement each.
pub async fn load_recipes(
    search: &dyn SearchRecipes,
    store: &StateStore<RecipeListState>,
    page: u32,
    query: String,
) {
    debug!(page, %query, "searching recipes");

    let mut snapshots = search.execute(page, &query);
    let mut applied = 0_usize;
    while let Some(snapshot) = snapshots.next().await {
        store.update(|state| reducer::apply_snapshot(state, snapshot));
        applied += 1;
    }

    debug!(page, %query, snapshots = applied, "search stream completed");
}
