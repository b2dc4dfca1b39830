//! Session presentation state: theme, cart badge, featured products.
//!
//! Nothing here touches the DOM directly; browser capabilities are injected
//! through the traits each module defines (see `crate::interop`).

pub mod cart;
pub mod featured;
pub mod preference;
pub mod theme;

pub use cart::{CartCount, CartCountAdapter, LOADING_BADGE};
pub use featured::{
    CatalogSource, Delay, FeaturedLoad, FeaturedSet, MountGuard, ProductAggregator,
};
pub use preference::{
    MemoryStorage, PreferenceStorage, ThemePreference, ThemePreferenceStore, THEME_STORAGE_KEY,
};
pub use theme::{
    resolve, ColorSchemeSignal, EffectiveTheme, NoColorScheme, SignalSubscription, ThemeResolver,
    ThemeState, ThemeSubscription,
};
