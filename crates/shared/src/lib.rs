//! Domain model shared by the recipe list presentation layer and its hosts.

pub mod data_state;
pub mod domain;
pub mod error;
pub mod message;

pub use data_state::{DataState, RecipeListData};
pub use domain::{FoodCategory, Recipe, RecipeId};
pub use error::{MessageBuildError, SearchError};
pub use message::{GenericMessageInfo, MessageQueue, MessageType, UiComponentType};
