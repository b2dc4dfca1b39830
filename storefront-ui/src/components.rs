pub mod cart_icon;
pub mod format;
pub mod header;
pub mod landing;
pub mod product_list;
pub mod styles;
pub mod theme_toggle;

pub use cart_icon::CartIcon;
pub use header::Header;
pub use landing::LandingPage;
pub use product_list::{ProductCard, ProductList};
pub use styles::STOREFRONT_STYLES;
pub use theme_toggle::{use_theme_provider, ThemeContext, ThemeToggle};
