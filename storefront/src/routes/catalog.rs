use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::WithRejection;
use metrics::{Metrics, put_metric};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use tokio::time::Instant;
use tracing::debug;

use crate::{
    pages::{NotFoundPage, ProductDetailPage, ProductsPage, render_page},
    routes::error_message_erasure::ApiError,
    server::ServerState,
};

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    q: Option<String>,
}

pub(crate) async fn home_handler() -> Redirect {
    Redirect::to("/products")
}

pub(crate) async fn products_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Query(query), _): WithRejection<Query<CatalogQuery>, ApiError>,
) -> Response {
    let start_time = Instant::now();

    let search_query = query.q.unwrap_or_default();
    let products: Vec<_> = state
        .catalog
        .fetch_products()
        .await
        .into_iter()
        .filter(|product| product.matches_query(&search_query))
        .collect();

    put_metric!(Metrics::CatalogRendered, 1);

    let page = ProductsPage::new(&state.shop_name, search_query, &products);

    debug!(
        "Rendered {} products in {}ms",
        products.len(),
        start_time.elapsed().as_millis()
    );

    render_page(StatusCode::OK, &page)
}

pub(crate) async fn product_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Response {
    let Some(product) = state.catalog.fetch_product(&id).await else {
        debug!("No product found for {id}");
        put_metric!(Metrics::ProductNotFound, 1);

        return render_page(
            StatusCode::NOT_FOUND,
            &NotFoundPage::product(&state.shop_name),
        );
    };

    put_metric!(Metrics::ProductRendered, 1, "category" => product.category.name.clone());

    render_page(
        StatusCode::OK,
        &ProductDetailPage::new(&state.shop_name, &product),
    )
}

pub(crate) async fn not_found_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    render_page(StatusCode::NOT_FOUND, &NotFoundPage::page(&state.shop_name))
}
