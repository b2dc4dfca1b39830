//! Featured products for the landing page.
//!
//! Each category is fetched independently and concurrently. Results land in a
//! slot indexed by the category's position, so the assembled list always
//! follows category order no matter which fetch finishes first. A failing,
//! empty, or slow category contributes nothing and never fails the whole set.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus_logger::tracing::{debug, info, warn};
use futures_util::future::{select, Either, LocalBoxFuture};
use futures_util::stream::{FuturesUnordered, StreamExt};
use shared_types::Product;

use crate::config::FeaturedConfig;
use crate::error::CatalogError;

/// Read-only, category-scoped view of the catalog.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Products in the order the catalog returns them.
    async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
}

/// Timer used to bound each category fetch.
pub trait Delay {
    fn delay(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Bounded, category-balanced product list. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedSet {
    products: Vec<Product>,
}

impl FeaturedSet {
    /// Concatenate per-category results in the given order and keep at most `total_limit`.
    pub fn assemble<I>(per_category: I, total_limit: usize) -> Self
    where
        I: IntoIterator<Item = Vec<Product>>,
    {
        Self {
            products: per_category
                .into_iter()
                .flatten()
                .take(total_limit)
                .collect(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl<'a> IntoIterator for &'a FeaturedSet {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Landing grid state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeaturedLoad {
    #[default]
    Loading,
    Ready(FeaturedSet),
}

/// Tracks whether the view that started a load is still on screen.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }
}

pub struct ProductAggregator<S, D> {
    source: S,
    delay: D,
    config: FeaturedConfig,
}

impl<S, D> ProductAggregator<S, D>
where
    S: CatalogSource,
    D: Delay,
{
    pub fn new(source: S, delay: D, config: FeaturedConfig) -> Self {
        Self {
            source,
            delay,
            config,
        }
    }

    pub fn config(&self) -> &FeaturedConfig {
        &self.config
    }

    /// Featured set for the configured categories and limits.
    pub async fn load(&self) -> FeaturedSet {
        self.fetch_featured(
            &self.config.categories,
            self.config.per_category_limit,
            self.config.total_limit,
        )
        .await
    }

    /// Like [`load`](Self::load), but returns `None` if `guard` was unmounted
    /// while the fetches were in flight.
    pub async fn load_while_mounted(&self, guard: &MountGuard) -> Option<FeaturedSet> {
        let featured = self.load().await;
        if guard.is_mounted() {
            Some(featured)
        } else {
            debug!(
                featured = featured.len(),
                "View unmounted before featured products arrived, discarding"
            );
            None
        }
    }

    pub async fn fetch_featured(
        &self,
        categories: &[String],
        per_category_limit: usize,
        total_limit: usize,
    ) -> FeaturedSet {
        let mut slots: Vec<Option<Vec<Product>>> = categories.iter().map(|_| None).collect();

        let mut pending: FuturesUnordered<_> = categories
            .iter()
            .enumerate()
            .map(move |(index, category)| async move {
                (index, self.fetch_slot(category, per_category_limit).await)
            })
            .collect();

        while let Some((index, products)) = pending.next().await {
            slots[index] = Some(products);
        }

        let featured = FeaturedSet::assemble(
            slots.into_iter().map(Option::unwrap_or_default),
            total_limit,
        );
        info!(
            categories = categories.len(),
            featured = featured.len(),
            "Featured products assembled"
        );
        featured
    }

    async fn fetch_slot(&self, category: &str, limit: usize) -> Vec<Product> {
        let timeout = self.config.fetch_timeout();
        let fetch = self.source.fetch_category(category);
        let deadline = self.delay.delay(timeout);

        let result = match select(fetch, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(CatalogError::Timeout(timeout)),
        };

        match result {
            Ok(mut products) => {
                let available = products.len();
                products.truncate(limit);
                debug!(
                    category,
                    available,
                    taken = products.len(),
                    "Fetched featured category"
                );
                products
            }
            Err(e) => {
                warn!(category, error = %e, "Failed to fetch featured category");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{self, FutureExt, Shared};

    use super::*;

    /// Completes after being polled `remaining + 1` times.
    struct YieldTimes {
        remaining: usize,
    }

    impl Future for YieldTimes {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.remaining == 0 {
                Poll::Ready(())
            } else {
                self.remaining -= 1;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    enum Feed {
        Items { yields: usize, products: Vec<Product> },
        Fail(CatalogError),
        Hang,
        /// Resolves once the test releases the gate.
        Gated {
            gate: Shared<oneshot::Receiver<()>>,
            products: Vec<Product>,
        },
    }

    #[derive(Default)]
    struct FakeCatalog {
        feeds: HashMap<String, Feed>,
        completed: RefCell<Vec<String>>,
    }

    impl FakeCatalog {
        fn with(mut self, category: &str, feed: Feed) -> Self {
            self.feeds.insert(category.to_string(), feed);
            self
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for FakeCatalog {
        async fn fetch_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
            let result = match self.feeds.get(category) {
                Some(Feed::Items { yields, products }) => {
                    YieldTimes { remaining: *yields }.await;
                    Ok(products.clone())
                }
                Some(Feed::Fail(error)) => Err(error.clone()),
                Some(Feed::Hang) => future::pending().await,
                Some(Feed::Gated { gate, products }) => {
                    let _ = gate.clone().await;
                    Ok(products.clone())
                }
                None => Err(CatalogError::Status(404)),
            };
            self.completed.borrow_mut().push(category.to_string());
            result
        }
    }

    /// Deadline that fires after a fixed number of polls.
    struct PollDeadline(usize);

    impl Delay for PollDeadline {
        fn delay(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
            YieldTimes { remaining: self.0 }.boxed_local()
        }
    }

    fn products(category: &str, count: usize) -> Vec<Product> {
        (1..=count)
            .map(|n| Product {
                name: Some(format!("{category}{n}")),
                ..Product::default()
            })
            .collect()
    }

    fn names(set: &FeaturedSet) -> Vec<&str> {
        set.iter().map(Product::display_name).collect()
    }

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn aggregator(catalog: FakeCatalog) -> ProductAggregator<FakeCatalog, PollDeadline> {
        ProductAggregator::new(catalog, PollDeadline(1_000), FeaturedConfig::default())
    }

    #[test]
    fn assemble_truncates_after_concatenation() {
        let set = FeaturedSet::assemble(
            vec![products("A", 3), Vec::new(), products("C", 3)],
            4,
        );
        assert_eq!(names(&set), vec!["A1", "A2", "A3", "C1"]);
    }

    #[test]
    fn assembly_follows_category_order_not_completion_order() {
        let catalog = FakeCatalog::default()
            .with("A", Feed::Items { yields: 6, products: products("A", 2) })
            .with("B", Feed::Items { yields: 4, products: products("B", 2) })
            .with("C", Feed::Items { yields: 2, products: products("C", 2) })
            .with("D", Feed::Items { yields: 0, products: products("D", 2) });
        let aggregator = aggregator(catalog);

        let set = block_on(aggregator.fetch_featured(&categories(&["A", "B", "C", "D"]), 2, 8));

        assert_eq!(
            aggregator.source.completed.borrow().as_slice(),
            &["D", "C", "B", "A"]
        );
        assert_eq!(
            names(&set),
            vec!["A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2"]
        );
    }

    #[test]
    fn slow_category_times_out_without_stalling_others() {
        let catalog = FakeCatalog::default()
            .with("A", Feed::Items { yields: 0, products: products("A", 3) })
            .with("B", Feed::Hang)
            .with("C", Feed::Items { yields: 1, products: products("C", 1) });
        let aggregator = ProductAggregator::new(catalog, PollDeadline(3), FeaturedConfig::default());

        let set = block_on(aggregator.fetch_featured(&categories(&["A", "B", "C"]), 2, 8));

        assert_eq!(names(&set), vec!["A1", "A2", "C1"]);
    }

    #[test]
    fn every_failure_kind_contributes_nothing() {
        let catalog = FakeCatalog::default()
            .with("A", Feed::Fail(CatalogError::Request("offline".to_string())))
            .with("B", Feed::Fail(CatalogError::Status(500)))
            .with("C", Feed::Fail(CatalogError::Decode("expected value".to_string())))
            .with("D", Feed::Items { yields: 0, products: products("D", 5) });
        let aggregator = aggregator(catalog);

        let set = block_on(aggregator.fetch_featured(&categories(&["A", "B", "C", "D"]), 2, 8));

        assert_eq!(names(&set), vec!["D1", "D2"]);
    }

    #[test]
    fn zero_limits_and_no_categories_are_empty() {
        let catalog = FakeCatalog::default()
            .with("A", Feed::Items { yields: 0, products: products("A", 2) });
        let aggregator = aggregator(catalog);

        assert!(block_on(aggregator.fetch_featured(&[], 2, 8)).is_empty());
        assert!(block_on(aggregator.fetch_featured(&categories(&["A"]), 0, 8)).is_empty());
        assert!(block_on(aggregator.fetch_featured(&categories(&["A"]), 2, 0)).is_empty());
    }

    #[test]
    fn load_uses_configured_categories() {
        let catalog = FakeCatalog::default()
            .with("Shirts", Feed::Items { yields: 0, products: products("S", 3) })
            .with("Mobiles", Feed::Items { yields: 0, products: products("M", 1) });
        let aggregator = aggregator(catalog);

        let set = block_on(aggregator.load());

        assert_eq!(names(&set), vec!["S1", "S2", "M1"]);
    }

    #[test]
    fn load_while_mounted_delivers_to_live_view() {
        let catalog = FakeCatalog::default()
            .with("Shirts", Feed::Items { yields: 2, products: products("S", 2) });
        let aggregator = aggregator(catalog);
        let guard = MountGuard::new();

        let mounted = block_on(aggregator.load_while_mounted(&guard));
        assert_eq!(mounted.map(|set| set.len()), Some(2));
    }

    #[test]
    fn load_after_unmount_is_discarded() {
        let (release, gate) = oneshot::channel();
        let catalog = FakeCatalog::default().with(
            "Shirts",
            Feed::Gated {
                gate: gate.shared(),
                products: products("S", 2),
            },
        );
        let aggregator = aggregator(catalog);
        let guard = MountGuard::new();

        let teardown = guard.clone();
        let load = aggregator.load_while_mounted(&guard);
        let unmount_then_release = async move {
            teardown.unmount();
            let _ = release.send(());
        };
        let (discarded, ()) = block_on(future::join(load, unmount_then_release));

        assert_eq!(discarded, None);
        assert!(!guard.is_mounted());
        assert!(aggregator
            .source
            .completed
            .borrow()
            .contains(&"Shirts".to_string()));
    }
}
