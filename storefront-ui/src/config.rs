//! Storefront configuration: API location and featured-grid limits.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

pub const STORE_NAME: &str = "SalesSavvy";
pub const STORE_TAGLINE: &str = "Your one-stop shop for all your needs";

pub const DEFAULT_CATEGORIES: [&str; 4] = ["Shirts", "Pants", "Mobiles", "Accessories"];
pub const DEFAULT_PER_CATEGORY_LIMIT: usize = 2;
pub const DEFAULT_TOTAL_LIMIT: usize = 8;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

/// Catalog API port used while developing against a local backend.
const LOCAL_API_BASE: &str = "http://localhost:9090";

/// Limits for the landing page's featured grid.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeaturedConfig {
    /// Fetched and assembled in this order.
    pub categories: Vec<String>,
    pub per_category_limit: usize,
    pub total_limit: usize,
    /// Upper bound for a single category fetch.
    pub fetch_timeout_ms: u64,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            per_category_limit: DEFAULT_PER_CATEGORY_LIMIT,
            total_limit: DEFAULT_TOTAL_LIMIT,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl FeaturedConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Everything the component tree needs to reach the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub api_base: String,
    pub featured: FeaturedConfig,
}

impl StorefrontConfig {
    /// Config for the page currently loaded in the browser.
    pub fn from_location() -> Self {
        Self {
            api_base: api_base().to_string(),
            featured: FeaturedConfig::default(),
        }
    }
}

/// Pick the API base URL for a page hostname
/// - In development (localhost): use the local catalog server
/// - In production: use same origin
pub fn api_base_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_API_BASE.to_string()
    } else {
        String::new()
    }
}

fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    api_base_for_host(&hostname)
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}
