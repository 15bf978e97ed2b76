use api_client::errors::ApiClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to call the product API")]
    Client(#[from] ApiClientError),
    #[error("Failed to deserialize product API response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
