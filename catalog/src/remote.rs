use api_client::{client::ApiClient, request::RequestBuilder};
use async_trait::async_trait;
use common::product::{Product, ProductApiResponse};
use tracing::{debug, error};

use crate::{errors::CatalogError, traits::ProductCatalog};

const PRODUCT_PATH: &str = "product";

/// Catalog backed by the upstream commerce API.
#[derive(Clone)]
pub struct RemoteCatalog {
    client: ApiClient,
    base_url: String,
}

impl RemoteCatalog {
    pub fn new(client: ApiClient, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/{PRODUCT_PATH}", self.base_url)
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/{PRODUCT_PATH}/{}", self.base_url, urlencoding::encode(id))
    }

    async fn get_envelope(&self, url: String) -> Result<ProductApiResponse, CatalogError> {
        let request = RequestBuilder::new().set_url(url.as_str()).build();
        let response = self.client.send(request).await?;

        debug!("{url} answered {}", response.status);

        Ok(serde_json::from_str::<ProductApiResponse>(&response.body)?)
    }

    pub async fn try_fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let envelope = self.get_envelope(self.products_url()).await?;

        debug!(
            "Product listing returned {} items ({})",
            envelope.data.len(),
            envelope.message
        );

        Ok(envelope.data)
    }

    // the single product endpoint still answers with a list
    pub async fn try_fetch_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let envelope = self.get_envelope(self.product_url(id)).await?;

        Ok(envelope.data.into_iter().next())
    }
}

#[async_trait]
impl ProductCatalog for RemoteCatalog {
    async fn fetch_product(&self, id: &str) -> Option<Product> {
        match self.try_fetch_product(id).await {
            Ok(product) => product,
            Err(err) => {
                error!("Error fetching product {id}: {err:?}");
                None
            }
        }
    }

    async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => products,
            Err(err) => {
                error!("Error fetching products: {err:?}");
                Vec::new()
            }
        }
    }
}
