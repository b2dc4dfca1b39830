//! Display defaults for catalog data. Pure functions, no RSX.

use shared_types::Product;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_DESCRIPTION: &str = "Premium quality product";
pub const FEATURED_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200?text=Product";
pub const LIST_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300?text=No+Image";

pub fn format_price(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Current price; an absent or non-numeric price renders as zero.
pub fn price_text(product: &Product) -> String {
    format_price(product.price_or_default())
}

pub fn original_price_text(product: &Product) -> Option<String> {
    product.original_price.map(format_price)
}

pub fn description_text(product: &Product) -> &str {
    product
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
}

pub fn image_or<'a>(product: &'a Product, placeholder: &'a str) -> &'a str {
    product.primary_image().unwrap_or(placeholder)
}

/// `None` when the catalog did not report stock.
pub fn stock_text(product: &Product) -> Option<String> {
    match (product.in_stock(), product.stock) {
        (Some(true), Some(stock)) => Some(format!("In Stock ({stock})")),
        (Some(false), _) => Some("Out of Stock".to_string()),
        _ => None,
    }
}
