//! Cart badge state.
//!
//! The badge must not show `0` before the real count arrives, so the count is
//! a tagged value all the way to the render boundary.

use std::fmt;

use dioxus_logger::tracing::warn;

/// Shown while the count is still loading.
pub const LOADING_BADGE: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CartCount {
    /// Cart data not loaded yet.
    #[default]
    Unknown,
    Known(u32),
}

impl CartCount {
    pub fn is_known(self) -> bool {
        matches!(self, CartCount::Known(_))
    }

    pub fn known(self) -> Option<u32> {
        match self {
            CartCount::Known(count) => Some(count),
            CartCount::Unknown => None,
        }
    }

    /// Text for the badge. A known zero renders as `"0"`.
    pub fn badge_text(self) -> String {
        match self {
            CartCount::Unknown => LOADING_BADGE.to_string(),
            CartCount::Known(count) => count.to_string(),
        }
    }
}

impl fmt::Display for CartCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartCount::Unknown => f.write_str(LOADING_BADGE),
            CartCount::Known(count) => write!(f, "{count}"),
        }
    }
}

/// Holds the badge value for one page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartCountAdapter {
    count: CartCount,
}

impl CartCountAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> CartCount {
        self.count
    }

    pub fn set(&mut self, count: u32) {
        self.count = CartCount::Known(count);
    }

    /// Accept a count from an untyped source. Negative values are a caller
    /// bug; they clamp to zero.
    pub fn set_signed(&mut self, count: i64) {
        let clamped = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
        if count < 0 {
            warn!(count, "Negative cart count clamped to zero");
        }
        self.set(clamped);
    }
}
