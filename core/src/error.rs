use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} is out of range for a distribution of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
