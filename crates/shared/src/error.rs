use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("page must be 1 or greater, got {0}")]
    InvalidPage(u32),
    #[error("unknown food category '{0}'")]
    UnknownCategory(String),
    #[error("recipe source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageBuildError {
    #[error("message title is required")]
    MissingTitle,
}
