use std::time::Duration;

use async_trait::async_trait;
use shared::{Recipe, SearchError};

use crate::search::RecipeCatalog;

pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Fixed list of recipes served page by page, with optional simulated latency.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
    page_size: usize,
    latency: Option<Duration>,
}

impl InMemoryCatalog {
    pub fn new(recipes: Vec<Recipe>, page_size: usize) -> Self {
        Self {
            recipes,
            page_size: page_size.max(1),
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryCatalog {
    async fn search(&self, page: u32, query: &str) -> Result<Vec<Recipe>, SearchError> {
        if page == 0 {
            return Err(SearchError::InvalidPage(page));
        }
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let Some(offset) = (page as usize - 1).checked_mul(self.page_size) else {
            return Ok(Vec::new());
        };
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.matches(query))
            .skip(offset)
            .take(self.page_size)
            .cloned()
            .collect())
    }
}
