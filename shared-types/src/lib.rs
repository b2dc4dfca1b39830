//! Shared types between the storefront UI and the catalog API
//!
//! The catalog backend is loose about its JSON: ids arrive under both
//! `productId` and `product_id`, numbers sometimes arrive as strings or
//! `null`, and image lists may be missing. These types accept all of that
//! and leave defaulting to the accessor methods.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Price shown when the catalog omits one or sends something non-numeric.
pub const DEFAULT_PRICE: f64 = 0.0;

// ============================================================================
// Catalog Types
// ============================================================================

/// Product record as returned by the public catalog endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        rename = "productId",
        default,
        deserialize_with = "lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_id: Option<i64>,

    /// Same id under the snake_case key older endpoints still emit
    #[serde(
        rename = "product_id",
        default,
        deserialize_with = "lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_product_id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,

    #[serde(
        rename = "originalPrice",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: Option<i64>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub images: Vec<String>,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn id(&self) -> Option<i64> {
        self.product_id.or(self.legacy_product_id)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(DEFAULT_PRICE)
    }

    /// First non-empty entry of `images`, then `imageUrl`.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
            .or_else(|| {
                self.image_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
            })
    }

    /// `None` when the catalog did not report stock at all.
    /// Zero and negative counts both mean out of stock.
    pub fn in_stock(&self) -> Option<bool> {
        self.stock.map(|stock| stock > 0)
    }
}

/// Body of `GET /api/products/public?category=<name>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicProductsResponse {
    pub products: Vec<Product>,
}

// ============================================================================
// Lenient field decoding
// ============================================================================

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|value| match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

// ============================================================================
// Tests
// ============================================================================
