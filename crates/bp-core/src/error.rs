use thiserror::Error;

#[derive(Error, Debug)]
pub enum BpError {
    #[error("{pipeline} rejected payload: {reason}")]
    Malformed {
        pipeline: &'static str,
        reason: String,
    },
    #[error("Codec error: {0}")]
    Codec(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BpError>;
