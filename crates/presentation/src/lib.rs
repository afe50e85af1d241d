//! Presentation layer for the recipe list screen: event handling, pagination
//! bookkeeping and the observable state the UI renders from.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod scope;
pub mod search;
pub mod state;
pub mod store;

pub use catalog::InMemoryCatalog;
pub use controller::{events::RecipeListEvent, ControllerSettings, RecipeListController};
pub use error::ControllerError;
pub use scope::ScreenScope;
pub use search::{CatalogSearch, RecipeCatalog, SearchRecipes, SnapshotStream};
pub use state::RecipeListState;
pub use store::StateStore;
