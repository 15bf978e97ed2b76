use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnError, DefaultOnNull, VecSkipError, serde_as};
use tracing::warn;

use crate::utils::PLACEHOLDER_IMAGE_PATH;

pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct Category {
    #[serde(rename = "_id")]
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProductImage {
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub secure_url: String,
    #[serde(rename = "optimizeUrl")]
    #[serde(default)]
    pub optimize_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProductVideo {
    #[serde(default)]
    pub public_id: String,
    pub secure_url: String,
}

// only `_id` and `name` are load bearing, anything else degrades to a default
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub category: Category,
    #[serde_as(deserialize_as = "DefaultOnNull<VecSkipError<_>>")]
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub video: Option<ProductVideo>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub status: bool,
    // the API sends a string, older records carry a bare number
    #[serde(deserialize_with = "string_or_number")]
    #[serde(default)]
    pub price: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(rename = "__v")]
    #[serde(default)]
    pub version: u32,
}

/// Envelope returned by both the list and the single product endpoints.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ProductApiResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(alias = "succcess")]
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(deserialize_with = "skip_invalid_products")]
    #[serde(default)]
    pub data: Vec<Product>,
}

impl Product {
    /// Card and hero image, falling back to the bundled placeholder.
    pub fn main_image_url(&self) -> &str {
        match self.images.first() {
            Some(image) if !image.optimize_url.is_empty() => &image.optimize_url,
            _ => PLACEHOLDER_IMAGE_PATH,
        }
    }

    /// Full resolution image used for link previews.
    pub fn share_image_url(&self) -> &str {
        match self.images.first() {
            Some(image) if !image.secure_url.is_empty() => &image.secure_url,
            _ => PLACEHOLDER_IMAGE_PATH,
        }
    }

    pub fn gallery_images(&self) -> &[ProductImage] {
        self.images.get(1..).unwrap_or_default()
    }

    pub fn display_price(&self) -> String {
        if self.price.trim().is_empty() {
            return PRICE_UNAVAILABLE.to_string();
        }

        format!("${}", self.price)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.name.to_lowercase().contains(&query)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(price) => Ok(price),
        Value::Number(price) => Ok(price.to_string()),
        other => {
            warn!("Ignoring price with unexpected shape: {other}");
            Ok(String::new())
        }
    }
}

// one broken record must not blank the whole listing
fn skip_invalid_products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let records: Option<Vec<Value>> = Option::deserialize(deserializer)?;

    let products = records
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, record)| match serde_json::from_value::<Product>(record) {
                Ok(product) => Some(product),
                Err(err) => {
                    warn!("Skipping product record {index}: {err}");
                    None
                }
            },
        )
        .collect();

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": 200,
        "succcess": true,
        "message": "Products fetched",
        "data": [{
            "_id": "66f1a",
            "name": "Cotton Panjabi",
            "description": "Hand stitched cotton panjabi",
            "category": { "_id": "c1", "name": "Menswear" },
            "images": [
                { "public_id": "p1", "secure_url": "https://cdn.test/p1.jpg", "optimizeUrl": "https://cdn.test/p1-opt.jpg" },
                { "public_id": "p2", "secure_url": "https://cdn.test/p2.jpg", "optimizeUrl": "https://cdn.test/p2-opt.jpg" }
            ],
            "video": { "public_id": "v1", "secure_url": "https://cdn.test/v1.mp4" },
            "status": true,
            "price": "1450",
            "createdAt": "2024-09-23T10:15:00.000Z",
            "updatedAt": "2024-09-24T08:00:00.000Z",
            "__v": 0
        }]
    }"#;

    fn parsed() -> Product {
        let response: ProductApiResponse = serde_json::from_str(SAMPLE).unwrap();

        assert!(response.success);
        assert_eq!(response.status, 200);

        response.data.into_iter().next().unwrap()
    }

    #[test]
    fn parses_upstream_envelope() {
        let product = parsed();

        assert_eq!(product.id, "66f1a");
        assert_eq!(product.category.name, "Menswear");
        assert_eq!(product.images.len(), 2);
        assert!(product.video.is_some());
        assert_eq!(product.created_at.unwrap().to_rfc3339(), "2024-09-23T10:15:00+00:00");
    }

    #[test]
    fn image_helpers_pick_first_image() {
        let product = parsed();

        assert_eq!(product.main_image_url(), "https://cdn.test/p1-opt.jpg");
        assert_eq!(product.share_image_url(), "https://cdn.test/p1.jpg");
        assert_eq!(product.gallery_images().len(), 1);
        assert_eq!(product.gallery_images()[0].public_id, "p2");
    }

    #[test]
    fn image_helpers_fall_back_without_images() {
        let mut product = parsed();
        product.images.clear();

        assert_eq!(product.main_image_url(), PLACEHOLDER_IMAGE_PATH);
        assert_eq!(product.share_image_url(), PLACEHOLDER_IMAGE_PATH);
        assert!(product.gallery_images().is_empty());
    }

    #[test]
    fn numeric_price_is_accepted() {
        let json = SAMPLE.replace(r#""price": "1450""#, r#""price": 1450"#);
        let response: ProductApiResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(response.data[0].display_price(), "$1450");
    }

    #[test]
    fn missing_envelope_fields_default() {
        let response: ProductApiResponse = serde_json::from_str("{}").unwrap();

        assert!(!response.success);
        assert!(response.data.is_empty());
    }

    #[test]
    fn broken_records_degrade_or_are_skipped() {
        let json = r#"{
            "data": [
                { "_id": "a", "name": "No price", "category": null,
                  "images": [{ "optimizeUrl": "https://cdn.test/a.jpg" }, null],
                  "createdAt": "yesterday", "video": { "public_id": "v" } },
                { "name": "No id" },
                { "_id": "c", "name": "Numeric status", "status": 1, "price": {"amount": 5} }
            ]
        }"#;

        let response: ProductApiResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = response.data.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);

        let first = &response.data[0];
        assert_eq!(first.display_price(), PRICE_UNAVAILABLE);
        assert_eq!(first.category, Category::default());
        assert_eq!(first.main_image_url(), "https://cdn.test/a.jpg");
        assert_eq!(first.share_image_url(), PLACEHOLDER_IMAGE_PATH);
        assert_eq!(first.images.len(), 1);
        assert_eq!(first.created_at, None);
        assert_eq!(first.video, None);

        assert!(!response.data[1].status);
        assert_eq!(response.data[1].display_price(), PRICE_UNAVAILABLE);
    }

    #[test]
    fn null_data_is_empty() {
        let response: ProductApiResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();

        assert!(response.data.is_empty());
    }

    #[test]
    fn query_matching_is_case_insensitive() {
        let product = parsed();

        assert!(product.matches_query("panjabi"));
        assert!(product.matches_query("MENSWEAR"));
        assert!(product.matches_query("  "));
        assert!(!product.matches_query("saree"));
    }
}
