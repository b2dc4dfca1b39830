//! Browser-backed implementations of the session capabilities.

use std::time::Duration;

use futures_util::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, Storage};

use crate::error::StorageError;
use crate::session::{
    ColorSchemeSignal, Delay, EffectiveTheme, MemoryStorage, NoColorScheme, PreferenceStorage,
    SignalSubscription, ThemePreferenceStore, ThemeResolver,
};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_error(value: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{value:?}"))
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// `None` when there is no window or the browser blocks storage access.
    pub fn local() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .map(|storage| Self { storage })
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Debug, Clone)]
pub struct MediaQuerySignal {
    query: MediaQueryList,
}

impl MediaQuerySignal {
    /// `None` when the browser has no `matchMedia`.
    pub fn prefers_dark() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .map(|query| Self { query })
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.query.matches())
    }

    fn on_change(&self, callback: Box<dyn Fn(bool)>) -> SignalSubscription {
        let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            callback(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        if let Err(e) = self
            .query
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            dioxus_logger::tracing::warn!("Failed to watch color scheme changes: {:?}", e);
            return SignalSubscription::noop();
        }

        let query = self.query.clone();
        SignalSubscription::new(move || {
            let _ = query
                .remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        })
    }
}

/// Timer backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn delay(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

/// Resolver wired to `localStorage` and `matchMedia`, degrading to session-only
/// storage and a light default when either is missing.
pub fn browser_theme_resolver() -> ThemeResolver {
    let store = match BrowserStorage::local() {
        Some(storage) => ThemePreferenceStore::new(storage),
        None => {
            dioxus_logger::tracing::warn!(
                "Local storage unavailable, theme preference will not persist"
            );
            ThemePreferenceStore::new(MemoryStorage::new())
        }
    };

    match MediaQuerySignal::prefers_dark() {
        Some(signal) => ThemeResolver::new(store, signal),
        None => ThemeResolver::new(store, NoColorScheme),
    }
}

/// Set `data-theme` on the document root so the stylesheet switches palettes.
pub fn apply_theme_to_document(theme: EffectiveTheme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_attr());
        }
    }
}

/// Full-page navigation to a path on this origin.
pub fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            dioxus_logger::tracing::warn!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
