use std::fmt::{self, Display};

/// Validation failures raised by the typed constructors.
#[derive(Debug)]
pub enum ModelError {
    InvalidId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(msg) => write!(f, "invalid id: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
