use thiserror::Error;

pub type ChakraResult<T> = Result<T, ChakraError>;

#[derive(Error, Debug)]
pub enum ChakraError {
    #[error("Session store error: {0}")]
    Session(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
