use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinedexError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("graph query failed: {0}")]
    Graph(String),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid identifier: {0}")]
    Model(#[from] cinedex_model::ModelError),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CinedexError>;
