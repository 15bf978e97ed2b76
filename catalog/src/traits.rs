use async_trait::async_trait;
use common::product::Product;

/// Read side of the product catalog. Failures never reach the caller,
/// they collapse into "not found" or an empty listing.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_product(&self, id: &str) -> Option<Product>;
    async fn fetch_products(&self) -> Vec<Product>;
}
