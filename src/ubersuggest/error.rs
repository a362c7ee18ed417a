use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum UbersuggestError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, UbersuggestError>;
