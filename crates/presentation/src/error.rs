use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("recipe list controller must be created inside a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
