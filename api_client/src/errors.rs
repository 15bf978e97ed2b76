use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Failed to build the HTTP client: {0}")]
    ClientBuild(String),
    #[error("Request failed inside the retry middleware")]
    Middleware(#[from] reqwest_middleware::Error),
    #[error("Request failed")]
    Reqwest(#[from] reqwest::Error),
    #[error("Failed to create request header")]
    InvalidHeader,
    #[error("Upstream responded with status {0}")]
    UnexpectedStatus(u16),
}

impl From<InvalidHeaderName> for ApiClientError {
    fn from(_err: InvalidHeaderName) -> Self {
        Self::InvalidHeader
    }
}

impl From<InvalidHeaderValue> for ApiClientError {
    fn from(_err: InvalidHeaderValue) -> Self {
        Self::InvalidHeader
    }
}
