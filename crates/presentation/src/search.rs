//! The search capability the controller is built around, plus an adapter that
//! turns a paged recipe catalog into that capability.

use std::sync::Arc;

use async_trait::async_trait;
use futures::{
    future,
    stream::{self, BoxStream},
    StreamExt,
};
use shared::{DataState, GenericMessageInfo, Recipe, RecipeListData, SearchError};
use tracing::{debug, warn};

pub type SnapshotStream = BoxStream<'static, DataState<RecipeListData>>;

/// Runs a recipe search and reports progress as an ordered, finite stream of
/// snapshots. Nothing happens until the stream is polled.
pub trait SearchRecipes: Send + Sync {
    fn execute(&self, page: u32, query: &str) -> SnapshotStream;
}

/// One page of matching recipes at a time. Pages start at 1.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn search(&self, page: u32, query: &str) -> Result<Vec<Recipe>, SearchError>;
}

/// Emits `loading`, then either every page from 1 through `page`
/// concatenated, or an error dialog describing the failure.
pub struct CatalogSearch<C> {
    catalog: Arc<C>,
}

impl<C> CatalogSearch<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

impl<C> SearchRecipes for CatalogSearch<C>
where
    C: RecipeCatalog + 'static,
{
    fn execute(&self, page: u32, query: &str) -> SnapshotStream {
        let catalog = Arc::clone(&self.catalog);
        let query = query.to_string();

        let result = async move {
            match accumulate_pages(catalog.as_ref(), page, &query).await {
                Ok(recipes) => {
                    debug!(page, %query, count = recipes.len(), "recipe search finished");
                    DataState::data(RecipeListData { recipes })
                }
                Err(err) => {
                    warn!(page, %query, error = %err, "recipe search failed");
                    DataState::error(GenericMessageInfo::error_dialog("Error", err.to_string()))
                }
            }
        };

        stream::once(future::ready(DataState::loading()))
            .chain(stream::once(result))
            .boxed()
    }
}

async fn accumulate_pages<C>(catalog: &C, page: u32, query: &str) -> Result<Vec<Recipe>, SearchError>
where
    C: RecipeCatalog + ?Sized,
{
    if page == 0 {
        return Err(SearchError::InvalidPage(page));
    }

    let mut recipes = Vec::new();
    for current in 1..=page {
        let batch = catalog.search(current, query).await?;
        if batch.is_empty() {
            break;
        }
        recipes.extend(batch);
    }
    Ok(recipes)
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
