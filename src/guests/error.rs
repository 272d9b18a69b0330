use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuestsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// Bad invocation. The payload is the usage line shown to the user.
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, GuestsError>;
