use std::sync::Arc;

use api_client::{client::ApiClient, errors::ApiClientError};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header::InvalidHeaderValue},
    routing::{get, post},
};
use catalog::{ProductCatalog, RemoteCatalog};
use common::utils::PLACEHOLDER_IMAGE_PATH;
use registrations::{MemoryRegistrationStore, RegistrationStore};
use thiserror::Error;

use crate::{
    config::Config,
    routes::{
        assets::{health_handler, logo_handler, placeholder_handler},
        catalog::{home_handler, not_found_handler, product_handler, products_handler},
        register::{api_register_handler, register_form_handler, register_page_handler},
    },
    service_layers::build_service_layers,
};

// registration bodies carry a single short field
const REQUEST_BODY_LIMIT: usize = 16 * 1024;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build the upstream client")]
    Client(#[from] ApiClientError),
    #[error("Allowed origin is not a valid header value")]
    InvalidOrigin(#[from] InvalidHeaderValue),
    #[error("Server IO failure")]
    Io(#[from] std::io::Error),
}

pub struct ServerState {
    pub catalog: Arc<dyn ProductCatalog>,
    pub registrations: Arc<dyn RegistrationStore>,
    pub shop_name: String,
}

impl ServerState {
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let client = ApiClient::new(&config.client_settings())?;

        Ok(Self {
            catalog: Arc::new(RemoteCatalog::new(client, config.api_base_url.clone())),
            registrations: Arc::new(MemoryRegistrationStore::with_capacity(
                config.max_registrations,
            )),
            shop_name: config.shop_name.clone(),
        })
    }
}

pub fn build_router(state: Arc<ServerState>, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/products", get(products_handler))
        .route("/products/{id}", get(product_handler))
        .route(
            "/register",
            get(register_page_handler).post(register_form_handler),
        )
        .route("/api/register", post(api_register_handler))
        .route(PLACEHOLDER_IMAGE_PATH, get(placeholder_handler))
        .route("/logo.svg", get(logo_handler))
        .route("/healthz", get(health_handler))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
        .layer(build_service_layers(allowed_origin))
        .with_state(state)
}
