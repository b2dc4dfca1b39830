use async_trait::async_trait;
use gloo_net::http::Request;
use shared_types::{Product, PublicProductsResponse};

use crate::error::CatalogError;
use crate::session::CatalogSource;

/// Path of the unauthenticated, category-filtered product listing.
pub const PUBLIC_PRODUCTS_PATH: &str = "/api/products/public";

pub fn public_products_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), PUBLIC_PRODUCTS_PATH)
}

pub async fn fetch_public_products(
    api_base: &str,
    category: &str,
) -> Result<Vec<Product>, CatalogError> {
    let url = public_products_url(api_base);

    let response = Request::get(&url)
        .query([("category", category)])
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let data: PublicProductsResponse = response
        .json()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))?;

    Ok(data.products)
}

/// Catalog reached over HTTP from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalog {
    api_base: String,
}

impl HttpCatalog {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        fetch_public_products(&self.api_base, category).await
    }
}
