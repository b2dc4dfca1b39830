//! Theme resolution.
//!
//! [`ThemeResolver`] owns the user's [`ThemePreference`] and derives the
//! [`EffectiveTheme`] from it. While the preference is `Device` the resolver
//! follows the system color-scheme signal; explicit choices ignore it.
//! Subscribers are called synchronously after every change, never while the
//! resolver's state is borrowed, so a subscriber may read the resolver back.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use dioxus_logger::tracing::{debug, info};

use crate::session::preference::{ThemePreference, ThemePreferenceStore};

/// The theme actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    /// Value for the document's `data-theme` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

/// Effective theme for a preference and the system's "prefers dark" reading.
/// An unavailable reading counts as light.
pub fn resolve(preference: ThemePreference, system_prefers_dark: Option<bool>) -> EffectiveTheme {
    match preference {
        ThemePreference::Light => EffectiveTheme::Light,
        ThemePreference::Dark => EffectiveTheme::Dark,
        ThemePreference::Device => match system_prefers_dark {
            Some(true) => EffectiveTheme::Dark,
            Some(false) | None => EffectiveTheme::Light,
        },
    }
}

/// What subscribers receive: the authoritative preference and what it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub effective: EffectiveTheme,
}

/// OS/browser color-scheme signal.
pub trait ColorSchemeSignal {
    /// `None` when the platform cannot report a preference.
    fn prefers_dark(&self) -> Option<bool>;

    /// Register for changes. Dropping the returned handle unregisters.
    fn on_change(&self, callback: Box<dyn Fn(bool)>) -> SignalSubscription;
}

/// Unsubscribe handle for a [`ColorSchemeSignal`] listener.
#[must_use = "dropping the subscription stops change notifications"]
pub struct SignalSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SignalSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// For signals that never change.
    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl fmt::Debug for SignalSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Signal for platforms without color-scheme support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColorScheme;

impl ColorSchemeSignal for NoColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn on_change(&self, _callback: Box<dyn Fn(bool)>) -> SignalSubscription {
        SignalSubscription::noop()
    }
}

type Subscriber = Rc<dyn Fn(ThemeState)>;

struct ResolverInner {
    store: ThemePreferenceStore,
    system: Box<dyn ColorSchemeSignal>,
    preference: ThemePreference,
    effective: EffectiveTheme,
    subscribers: Vec<(u64, Subscriber)>,
    next_subscriber_id: u64,
    system_subscription: Option<SignalSubscription>,
}

impl ResolverInner {
    fn state(&self) -> ThemeState {
        ThemeState {
            preference: self.preference,
            effective: self.effective,
        }
    }
}

/// Shared handle to the session's theme state. Clones refer to the same resolver.
#[derive(Clone)]
pub struct ThemeResolver {
    inner: Rc<RefCell<ResolverInner>>,
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ThemeResolver")
            .field("preference", &inner.preference)
            .field("effective", &inner.effective)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl PartialEq for ThemeResolver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ThemeResolver {
    pub fn new(store: ThemePreferenceStore, system: impl ColorSchemeSignal + 'static) -> Self {
        let preference = store.read();
        let effective = resolve(preference, system.prefers_dark());

        let inner = Rc::new(RefCell::new(ResolverInner {
            store,
            system: Box::new(system),
            preference,
            effective,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
            system_subscription: None,
        }));

        let weak = Rc::downgrade(&inner);
        let subscription = inner.borrow().system.on_change(Box::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                ThemeResolver { inner }.on_system_change(prefers_dark);
            }
        }));
        inner.borrow_mut().system_subscription = Some(subscription);

        debug!(
            preference = %preference,
            effective = effective.as_attr(),
            "Theme resolver initialized"
        );

        Self { inner }
    }

    pub fn state(&self) -> ThemeState {
        self.inner.borrow().state()
    }

    pub fn preference(&self) -> ThemePreference {
        self.inner.borrow().preference
    }

    pub fn effective(&self) -> EffectiveTheme {
        self.inner.borrow().effective
    }

    /// Persist and apply an explicit user selection. Subscribers are always
    /// notified, even when the rendered theme stays the same.
    pub fn set_preference(&self, preference: ThemePreference) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            inner.store.write(preference);
            let effective = resolve(preference, inner.system.prefers_dark());
            inner.preference = preference;
            inner.effective = effective;
            inner.state()
        };

        info!(
            preference = %state.preference,
            effective = state.effective.as_attr(),
            "Theme preference changed"
        );
        self.notify(state);
    }

    pub fn subscribe(&self, callback: impl Fn(ThemeState) + 'static) -> ThemeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));

        ThemeSubscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn on_system_change(&self, prefers_dark: bool) {
        let state = {
            let mut inner = self.inner.borrow_mut();
            if inner.preference != ThemePreference::Device {
                debug!(
                    preference = %inner.preference,
                    "Ignoring system color-scheme change"
                );
                return;
            }

            let effective = resolve(ThemePreference::Device, Some(prefers_dark));
            if effective == inner.effective {
                return;
            }
            inner.effective = effective;
            inner.state()
        };

        debug!(
            effective = state.effective.as_attr(),
            "System color scheme changed"
        );
        self.notify(state);
    }

    fn notify(&self, state: ThemeState) {
        let subscribers: Vec<Subscriber> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in subscribers {
            callback(state);
        }
    }
}

/// Keeps a [`ThemeResolver::subscribe`] callback registered until dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ThemeSubscription {
    inner: Weak<RefCell<ResolverInner>>,
    id: u64,
}

impl fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}
