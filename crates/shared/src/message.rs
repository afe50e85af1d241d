//! User-facing messages and the queue the UI drains one entry at a time.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MessageBuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Success,
    Error,
    Info,
    None,
}

/// How the UI should present a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiComponentType {
    Dialog,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessageInfo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub message_type: MessageType,
    pub ui_component_type: UiComponentType,
}

impl GenericMessageInfo {
    pub fn builder() -> GenericMessageInfoBuilder {
        GenericMessageInfoBuilder::default()
    }

    /// Error shown in a dialog; the shape every search failure takes.
    pub fn error_dialog(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: Some(description.into()),
            message_type: MessageType::Error,
            ui_component_type: UiComponentType::Dialog,
        }
    }
}

#[derive(Debug, Default)]
pub struct GenericMessageInfoBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    message_type: Option<MessageType>,
    ui_component_type: Option<UiComponentType>,
}

impl GenericMessageInfoBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = Some(message_type);
        self
    }

    pub fn ui_component_type(mut self, ui_component_type: UiComponentType) -> Self {
        self.ui_component_type = Some(ui_component_type);
        self
    }

    pub fn build(self) -> Result<GenericMessageInfo, MessageBuildError> {
        let title = self.title.ok_or(MessageBuildError::MissingTitle)?;
        Ok(GenericMessageInfo {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title,
            description: self.description,
            message_type: self.message_type.unwrap_or(MessageType::None),
            ui_component_type: self.ui_component_type.unwrap_or(UiComponentType::None),
        })
    }
}

/// FIFO of pending messages. The head is what the UI is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageQueue {
    items: VecDeque<GenericMessageInfo>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: GenericMessageInfo) {
        self.items.push_back(message);
    }

    pub fn peek(&self) -> Option<&GenericMessageInfo> {
        self.items.front()
    }

    pub fn poll(&mut self) -> Option<GenericMessageInfo> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenericMessageInfo> {
        self.items.iter()
    }
}

impl FromIterator<GenericMessageInfo> for MessageQueue {
    fn from_iter<I: IntoIterator<Item = GenericMessageInfo>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
