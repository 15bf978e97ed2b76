use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use common::product::Product;
use tracing::error;

const SHARE_IMAGE_WIDTH: u32 = 800;
const SHARE_IMAGE_HEIGHT: u32 = 600;

/// Head metadata. Empty strings are left out of the rendered `<head>`.
#[derive(Debug, Default, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn for_product(product: &Product) -> Self {
        Self {
            title: product.name.clone(),
            description: product.description.clone(),
            image_url: product.share_image_url().to_string(),
            image_width: SHARE_IMAGE_WIDTH,
            image_height: SHARE_IMAGE_HEIGHT,
            image_alt: product.name.clone(),
        }
    }
}

pub struct ProductCardView {
    pub id: String,
    pub href: String,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            href: product_href(&product.id),
            image_url: product.main_image_url().to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.display_price(),
            category: product.category.name.clone(),
        }
    }
}

pub struct GalleryImageView {
    pub url: String,
    pub alt: String,
}

pub struct ProductDetailView {
    pub image_url: String,
    pub gallery: Vec<GalleryImageView>,
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub video_url: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        let gallery = product
            .gallery_images()
            .iter()
            .enumerate()
            .map(|(index, image)| GalleryImageView {
                url: image.optimize_url.clone(),
                alt: format!("{} - {}", product.name, index + 1),
            })
            .collect();

        Self {
            image_url: product.main_image_url().to_string(),
            gallery,
            name: product.name.clone(),
            price: product.display_price(),
            category: product.category.name.clone(),
            description: product.description.clone(),
            video_url: product
                .video
                .as_ref()
                .map(|video| video.secure_url.clone())
                .unwrap_or_default(),
        }
    }
}

pub fn product_href(id: &str) -> String {
    format!("/products/{}", urlencoding::encode(id))
}

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPage {
    pub shop_name: String,
    pub search_query: String,
    pub meta: PageMeta,
    pub products: Vec<ProductCardView>,
}

impl ProductsPage {
    pub fn new(shop_name: &str, search_query: String, products: &[Product]) -> Self {
        Self {
            shop_name: shop_name.to_string(),
            search_query,
            meta: PageMeta::titled("Our Products"),
            products: products.iter().map(ProductCardView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "product_detail.html")]
pub struct ProductDetailPage {
    pub shop_name: String,
    pub search_query: String,
    pub meta: PageMeta,
    pub product: ProductDetailView,
}

impl ProductDetailPage {
    pub fn new(shop_name: &str, product: &Product) -> Self {
        Self {
            shop_name: shop_name.to_string(),
            search_query: String::new(),
            meta: PageMeta::for_product(product),
            product: ProductDetailView::from(product),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub shop_name: String,
    pub search_query: String,
    pub meta: PageMeta,
    pub message: String,
}

impl NotFoundPage {
    pub fn product(shop_name: &str) -> Self {
        Self {
            shop_name: shop_name.to_string(),
            search_query: String::new(),
            meta: PageMeta::titled("Product Not Found"),
            message: "The product you are looking for does not exist or is no longer available."
                .into(),
        }
    }

    pub fn page(shop_name: &str) -> Self {
        Self {
            shop_name: shop_name.to_string(),
            search_query: String::new(),
            meta: PageMeta::titled("Page Not Found"),
            message: "There is nothing at this address.".into(),
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub shop_name: String,
    pub search_query: String,
    pub meta: PageMeta,
    pub name: String,
    pub name_error: String,
}

impl RegisterPage {
    pub fn new(shop_name: &str) -> Self {
        Self {
            shop_name: shop_name.to_string(),
            search_query: String::new(),
            meta: PageMeta::titled("Register"),
            name: String::new(),
            name_error: String::new(),
        }
    }

    pub fn with_error(mut self, name: Option<String>, error: &str) -> Self {
        self.name = name.unwrap_or_default();
        self.name_error = error.to_string();
        self
    }
}

pub fn render_page<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("Failed to render template: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
