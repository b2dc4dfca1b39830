pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod interop;
pub mod session;

pub use api::*;
pub use components::*;
pub use config::{FeaturedConfig, StorefrontConfig};
pub use error::{CatalogError, StorageError};
pub use interop::*;
pub use session::*;
