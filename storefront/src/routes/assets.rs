use axum::{http::header, response::IntoResponse};

const PLACEHOLDER_PRODUCT_SVG: &str = include_str!("../../assets/placeholder-product.svg");
const LOGO_SVG: &str = include_str!("../../assets/logo.svg");

const SVG_HEADERS: [(header::HeaderName, &str); 2] = [
    (header::CONTENT_TYPE, "image/svg+xml"),
    (header::CACHE_CONTROL, "public, max-age=86400"),
];

pub(crate) async fn placeholder_handler() -> impl IntoResponse {
    (SVG_HEADERS, PLACEHOLDER_PRODUCT_SVG)
}

pub(crate) async fn logo_handler() -> impl IntoResponse {
    (SVG_HEADERS, LOGO_SVG)
}

pub(crate) async fn health_handler() -> &'static str {
    "ok"
}
