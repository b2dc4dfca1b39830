//! Landing-page session behaviour exercised through the public crate API.
//!
//! The catalog and the timer are in-process fakes, so nothing here needs a
//! browser or a network. Completion order is steered by how many times each
//! fake fetch yields before resolving.
//!
//! Covered:
//!   ✓ Featured order follows category order, not completion order
//!   ✓ A failing category is skipped without failing the set
//!   ✓ Every category failing yields an empty set
//!   ✓ Loading twice against an unchanged catalog gives the same set
//!   ✓ A load that finishes after the view unmounts is discarded
//!   ✓ Theme preference survives a new session over the same storage
//!   ✓ Cart badge tracks the adapter across Unknown and Known

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{join, FutureExt, LocalBoxFuture, Shared};
use shared_types::Product;

use storefront_ui::{
    CartCount, CartCountAdapter, CatalogError, CatalogSource, Delay, EffectiveTheme,
    FeaturedConfig, FeaturedLoad, MemoryStorage, MountGuard, NoColorScheme, ProductAggregator,
    ThemePreference, ThemePreferenceStore, ThemeResolver, LOADING_BADGE,
};

// ─── Helpers ─────────────────────────────────────────────────────────────────

struct Yield(usize);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Per-category canned responses: `(yields before resolving, result)`.
#[derive(Default)]
struct ScriptedCatalog {
    responses: HashMap<&'static str, (usize, Result<Vec<Product>, CatalogError>)>,
    gates: HashMap<&'static str, Shared<oneshot::Receiver<()>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedCatalog {
    fn respond(mut self, category: &'static str, yields: usize, count: usize) -> Self {
        self.responses
            .insert(category, (yields, Ok(named(category, count))));
        self
    }

    /// Hold `category` back until the returned sender fires or is dropped.
    fn gate(mut self, category: &'static str) -> (Self, oneshot::Sender<()>) {
        let (release, gate) = oneshot::channel();
        self.gates.insert(category, gate.shared());
        (self, release)
    }

    fn fail(mut self, category: &'static str, error: CatalogError) -> Self {
        self.responses.insert(category, (0, Err(error)));
        self
    }
}

#[async_trait(?Send)]
impl<'a> CatalogSource for &'a ScriptedCatalog {
    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.calls.borrow_mut().push(category.to_string());
        if let Some(gate) = self.gates.get(category) {
            let _ = gate.clone().await;
        }
        match self.responses.get(category) {
            Some((yields, result)) => {
                Yield(*yields).await;
                result.clone()
            }
            None => Err(CatalogError::Status(404)),
        }
    }
}

/// Timer that never fires; every scripted fetch resolves on its own.
struct NeverFires;

impl Delay for NeverFires {
    fn delay(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        futures::future::pending().boxed_local()
    }
}

fn named(category: &str, count: usize) -> Vec<Product> {
    (1..=count)
        .map(|n| Product {
            name: Some(format!("{category}{n}")),
            ..Product::default()
        })
        .collect()
}

fn names(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.display_name().to_string())
        .collect()
}

fn aggregator(catalog: &ScriptedCatalog) -> ProductAggregator<&ScriptedCatalog, NeverFires> {
    let config = FeaturedConfig {
        categories: ["A", "B", "C", "D"].iter().map(|c| c.to_string()).collect(),
        ..FeaturedConfig::default()
    };
    ProductAggregator::new(catalog, NeverFires, config)
}

// ─── Featured products ───────────────────────────────────────────────────────

#[test]
fn test_featured_follows_category_order_when_later_categories_finish_first() {
    let catalog = ScriptedCatalog::default()
        .respond("A", 9, 3)
        .respond("B", 6, 2)
        .respond("C", 3, 2)
        .respond("D", 0, 5);

    let featured = block_on(aggregator(&catalog).load());

    assert_eq!(
        names(featured.products()),
        ["A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2"]
    );
    assert_eq!(catalog.calls.borrow().len(), 4);
}

#[test]
fn test_failed_category_is_skipped() {
    let catalog = ScriptedCatalog::default()
        .respond("A", 2, 3)
        .fail("B", CatalogError::Status(500))
        .respond("C", 1, 3)
        .respond("D", 0, 3);

    let featured = block_on(aggregator(&catalog).load());

    assert_eq!(
        names(featured.products()),
        ["A1", "A2", "C1", "C2", "D1", "D2"]
    );
}

#[test]
fn test_all_categories_failing_yields_empty_set() {
    let catalog = ScriptedCatalog::default()
        .fail("A", CatalogError::Request("offline".into()))
        .fail("B", CatalogError::Status(503))
        .fail("C", CatalogError::Decode("not json".into()));

    let featured = block_on(aggregator(&catalog).load());

    assert!(featured.is_empty());
    assert_eq!(FeaturedLoad::Ready(featured), FeaturedLoad::Ready(Default::default()));
}

#[test]
fn test_repeated_loads_are_identical() {
    let catalog = ScriptedCatalog::default()
        .respond("A", 1, 1)
        .respond("B", 4, 4)
        .respond("D", 2, 2);
    let aggregator = aggregator(&catalog);

    let first = block_on(aggregator.load());
    let second = block_on(aggregator.load());

    assert_eq!(first, second);
    assert_eq!(names(first.products()), ["A1", "B1", "B2", "D1", "D2"]);
}

#[test]
fn test_unmounted_view_receives_nothing() {
    let (catalog, release) = ScriptedCatalog::default().respond("A", 0, 2).gate("A");
    let aggregator = aggregator(&catalog);
    let guard = MountGuard::new();

    let teardown = guard.clone();
    let unmount_then_release = async move {
        teardown.unmount();
        let _ = release.send(());
    };
    let (delivered, ()) = block_on(join(
        aggregator.load_while_mounted(&guard),
        unmount_then_release,
    ));

    assert_eq!(delivered, None);
    assert_eq!(catalog.calls.borrow().len(), 4);
}

// ─── Theme and cart ──────────────────────────────────────────────────────────

#[test]
fn test_theme_preference_survives_new_session() {
    let storage = MemoryStorage::default();

    let first = ThemeResolver::new(ThemePreferenceStore::new(storage.clone()), NoColorScheme);
    assert_eq!(first.preference(), ThemePreference::Device);
    first.set_preference(ThemePreference::Dark);

    let second = ThemeResolver::new(ThemePreferenceStore::new(storage), NoColorScheme);
    assert_eq!(second.preference(), ThemePreference::Dark);
    assert_eq!(second.effective(), EffectiveTheme::Dark);
}

#[test]
fn test_cart_badge_tracks_adapter() {
    let mut adapter = CartCountAdapter::new();
    assert_eq!(adapter.get(), CartCount::Unknown);
    assert_eq!(adapter.get().badge_text(), LOADING_BADGE);

    adapter.set(3);
    assert_eq!(adapter.get().badge_text(), "3");

    adapter.set_signed(-2);
    assert_eq!(adapter.get(), CartCount::Known(0));
    assert_eq!(adapter.get().badge_text(), "0");
}
