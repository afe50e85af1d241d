//! Controller layer: UI events, reducer-like state transitions, and search orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, warn};

use crate::{
    error::ControllerError, scope::ScreenScope, search::SearchRecipes, state::RecipeListState,
    store::StateStore,
};
use events::RecipeListEvent;

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub initial_query: String,
    /// Dispatch `LoadRecipes` as soon as the controller exists.
    pub load_on_start: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            initial_query: String::new(),
            load_on_start: true,
        }
    }
}

/// State holder for the recipe list screen.
///
/// [`handle`](Self::handle) never blocks: each event runs as its own task on
/// the controller's [`ScreenScope`]. Independently dispatched events may
/// complete in any order, so a slow, stale search can overwrite the results
/// of a newer one. Dropping the controller aborts all outstanding work.
pub struct RecipeListController {
    inner: Arc<ControllerInner>,
    scope: ScreenScope,
}

struct ControllerInner {
    search: Arc<dyn SearchRecipes>,
    store: StateStore<RecipeListState>,
}

impl RecipeListController {
    pub fn new(
        search: Arc<dyn SearchRecipes>,
        settings: ControllerSettings,
    ) -> Result<Self, ControllerError> {
        let scope = ScreenScope::current()?;
        let controller = Self {
            inner: Arc::new(ControllerInner {
                search,
                store: StateStore::new(RecipeListState::with_query(settings.initial_query)),
            }),
            scope,
        };

        if settings.load_on_start {
            controller.handle(RecipeListEvent::LoadRecipes);
        }
        Ok(controller)
    }

    pub fn handle(&self, event: RecipeListEvent) {
        let inner = Arc::clone(&self.inner);
        self.scope.spawn(async move { inner.process(event).await });
    }

    /// Runs `event` to completion on the caller's task.
    pub async fn process(&self, event: RecipeListEvent) {
        self.inner.process(event).await;
    }

    pub fn state(&self) -> RecipeListState {
        self.inner.store.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<RecipeListState> {
        self.inner.store.subscribe()
    }

    pub fn state_stream(&self) -> WatchStream<RecipeListState> {
        WatchStream::new(self.inner.store.subscribe())
    }

    pub async fn wait_idle(&self) {
        self.scope.wait_idle().await;
    }

    pub fn close(&self) {
        self.scope.cancel();
    }
}

impl ControllerInner {
    async fn process(&self, event: RecipeListEvent) {
        debug!(
            event = event.name(),
            searches = event.triggers_search(),
            "handling recipe list event"
        );

        match event {
            RecipeListEvent::LoadRecipes => {
                let (page, query) = self.store.read(reducer::search_key);
                self.load_recipes(page, query).await;
            }
            RecipeListEvent::NewSearch => {
                self.search_after(reducer::reset_for_new_search).await;
            }
            RecipeListEvent::NextPage => {
                self.search_after(reducer::next_page).await;
            }
            RecipeListEvent::SelectCategory(category) => {
                self.search_after(|state| reducer::select_category(state, category))
                    .await;
            }
            RecipeListEvent::UpdateQuery(query) => {
                self.store.update(|state| reducer::update_query(state, query));
            }
            RecipeListEvent::RemoveHeadMessage => {
                self.store.update(reducer::remove_head_message);
            }
            RecipeListEvent::Unknown(name) => {
                warn!(event = %name, "invalid recipe list event");
                self.store.update(|state| {
                    reducer::push_message(state, reducer::invalid_event_message())
                });
            }
        }
    }

    /// Applies `transition` and searches with the page/query it produced,
    /// even if another event changes the state before the search starts.
    async fn search_after(&self, transition: impl FnOnce(&RecipeListState) -> RecipeListState) {
        let (page, query) = self.store.update_and_read(transition, reducer::search_key);
        self.load_recipes(page, query).await;
    }

    async fn load_recipes(&self, page: u32, query: String) {
        orchestration::load_recipes(self.search.as_ref(), &self.store, page, query).await;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
