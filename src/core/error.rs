//! Error types for the options-flow crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Data error: {0}")]
    Data(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl FlowError {
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
