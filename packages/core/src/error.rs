use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Unsupported preferences version: {0}")]
    UnsupportedVersion(u32),
}

pub type ArticleResult<T> = Result<T, ArticleError>;
