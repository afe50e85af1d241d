use serde::{Deserialize, Serialize};

use crate::{domain::Recipe, message::GenericMessageInfo};

/// One snapshot emitted by a long-running operation: progress flag, optional
/// payload, optional user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataState<T> {
    pub is_loading: bool,
    pub data: Option<T>,
    pub message: Option<GenericMessageInfo>,
}

impl<T> DataState<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            data: None,
            message: None,
        }
    }

    pub fn data(data: T) -> Self {
        Self {
            is_loading: false,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: GenericMessageInfo) -> Self {
        Self {
            is_loading: false,
            data: None,
            message: Some(message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeListData {
    pub recipes: Vec<Recipe>,
}
