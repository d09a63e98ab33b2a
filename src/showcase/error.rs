use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShowcaseError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ShowcaseError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
