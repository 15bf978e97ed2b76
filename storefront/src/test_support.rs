use std::sync::Arc;

use async_trait::async_trait;
use catalog::ProductCatalog;
use common::product::{Category, Product, ProductImage};
use registrations::MemoryRegistrationStore;

use crate::server::ServerState;

pub(crate) fn sample_product() -> Product {
    let image = |n: u32| ProductImage {
        public_id: format!("p{n}"),
        secure_url: format!("https://cdn.test/p{n}.jpg"),
        optimize_url: format!("https://cdn.test/p{n}-opt.jpg"),
    };

    Product {
        id: "66f1a".into(),
        name: "Cotton <Panjabi>".into(),
        description: "Hand stitched & soft".into(),
        category: Category {
            id: "c1".into(),
            name: "Menswear".into(),
        },
        images: vec![image(1), image(2), image(3)],
        video: None,
        status: true,
        price: "1450".into(),
        created_at: None,
        updated_at: None,
        version: 0,
    }
}

pub(crate) struct StubCatalog {
    pub products: Vec<Product>,
}

#[async_trait]
impl ProductCatalog for StubCatalog {
    async fn fetch_product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|product| product.id == id).cloned()
    }

    async fn fetch_products(&self) -> Vec<Product> {
        self.products.clone()
    }
}

pub(crate) fn stub_state(products: Vec<Product>) -> (Arc<ServerState>, Arc<MemoryRegistrationStore>) {
    let store = Arc::new(MemoryRegistrationStore::new());
    let state = ServerState {
        catalog: Arc::new(StubCatalog { products }),
        registrations: store.clone(),
        shop_name: "Flow Shop".into(),
    };

    (Arc::new(state), store)
}
