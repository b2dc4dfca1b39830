use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::Product;

use crate::api::HttpCatalog;
use crate::components::format::{
    description_text, image_or, original_price_text, price_text, FEATURED_PLACEHOLDER_IMAGE,
};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{StorefrontConfig, STORE_NAME, STORE_TAGLINE};
use crate::interop::BrowserDelay;
use crate::session::{FeaturedLoad, MountGuard, ProductAggregator};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

pub const EMPTY_FEATURED_MESSAGE: &str = "No products available yet. Check back soon!";

const OFFERS: [(&str, &str, &str); 4] = [
    ("🎉", "New User Offer", "Get 20% off on your first order"),
    ("🚚", "Free Shipping", "On orders above ₹999"),
    ("💳", "Easy Payments", "Secure payment with Razorpay"),
    ("↩️", "Easy Returns", "30-day return policy"),
];

const BRANDING: [(&str, &str, &str); 4] = [
    ("⭐", "Quality Products", "We source only the best quality products for our customers"),
    ("💰", "Best Prices", "Competitive pricing with regular discounts and offers"),
    ("🔒", "Secure Shopping", "Your data and payments are completely secure"),
    ("👥", "24/7 Support", "Our customer support team is always here to help"),
];

/// Icon and blurb for a category card.
pub fn category_card(category: &str) -> (&'static str, &'static str) {
    match category {
        "Shirts" => ("👔", "Premium quality shirts"),
        "Pants" => ("👖", "Comfortable & stylish"),
        "Mobiles" => ("📱", "Latest smartphones"),
        "Accessories" => ("⌚", "Complete your look"),
        _ => ("🛍️", "Explore the collection"),
    }
}

#[component]
pub fn LandingPage(on_navigate: Callback<String>) -> Element {
    let config = use_context::<StorefrontConfig>();
    let mut featured = use_signal(FeaturedLoad::default);
    let guard = use_hook(MountGuard::new);

    {
        let guard = guard.clone();
        use_drop(move || guard.unmount());
    }

    let aggregator = use_hook(|| {
        Rc::new(ProductAggregator::new(
            HttpCatalog::new(config.api_base.clone()),
            BrowserDelay,
            config.featured.clone(),
        ))
    });

    use_hook(|| {
        let aggregator = Rc::clone(&aggregator);
        let guard = guard.clone();
        spawn(async move {
            if let Some(set) = aggregator.load_while_mounted(&guard).await {
                featured.set(FeaturedLoad::Ready(set));
            }
        })
    });

    let go = move |path: &'static str| move |_: MouseEvent| on_navigate.call(path.to_string());
    let categories = config.featured.categories.clone();

    rsx! {
        div {
            class: "landing-page",

            header {
                class: "landing-header",
                div {
                    class: "landing-logo",
                    h1 { "{STORE_NAME}" }
                    p { "{STORE_TAGLINE}" }
                }
                div {
                    class: "landing-header-actions",
                    ThemeToggle {}
                    button { class: "login-btn", onclick: go(LOGIN_PATH), "Sign In" }
                    button { class: "register-btn", onclick: go(REGISTER_PATH), "Create Account" }
                }
            }

            section {
                class: "hero-section",
                h1 { class: "hero-title", "Welcome to {STORE_NAME}" }
                p { class: "hero-subtitle", "Discover amazing products at unbeatable prices" }
                div {
                    class: "hero-buttons",
                    button { class: "cta-button primary", onclick: go(REGISTER_PATH), "Start Shopping Now" }
                    button { class: "cta-button secondary", onclick: go(LOGIN_PATH), "Sign In to Your Account" }
                }
            }

            section {
                class: "offers-section",
                div {
                    class: "offers-container",
                    for (icon, title, text) in OFFERS {
                        div {
                            class: "offer-card",
                            span { class: "offer-icon", "{icon}" }
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }

            section {
                class: "featured-products-section",
                div {
                    class: "section-container",
                    h2 { class: "section-title", "Featured Products" }
                    FeaturedGrid {
                        load: featured(),
                        on_view_product: move |_| on_navigate.call(REGISTER_PATH.to_string()),
                    }
                }
            }

            section {
                class: "categories-section",
                div {
                    class: "section-container",
                    h2 { class: "section-title", "Shop by Category" }
                    div {
                        class: "categories-grid",
                        for category in categories {
                            CategoryCard {
                                name: category.clone(),
                                on_select: move |_| on_navigate.call(REGISTER_PATH.to_string()),
                            }
                        }
                    }
                }
            }

            section {
                class: "branding-section",
                div {
                    class: "section-container",
                    h2 { class: "section-title", "Why Choose {STORE_NAME}?" }
                    div {
                        class: "branding-grid",
                        for (icon, title, text) in BRANDING {
                            div {
                                class: "branding-card",
                                div { class: "branding-icon", "{icon}" }
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "cta-section",
                h2 { "Ready to Start Shopping?" }
                p { "Join thousands of happy customers today" }
                button { class: "cta-button large", onclick: go(REGISTER_PATH), "Create Your Account Now" }
            }

            LandingFooter {}
        }
    }
}

#[component]
fn FeaturedGrid(load: FeaturedLoad, on_view_product: Callback<()>) -> Element {
    match load {
        FeaturedLoad::Loading => rsx! {
            div { class: "loading-message", "Loading products..." }
        },
        FeaturedLoad::Ready(set) if set.is_empty() => rsx! {
            div {
                class: "no-products-message",
                p { "{EMPTY_FEATURED_MESSAGE}" }
            }
        },
        FeaturedLoad::Ready(set) => rsx! {
            div {
                class: "products-grid",
                for product in set.into_products() {
                    FeaturedCard { product: product.clone(), on_view_product }
                }
            }
        },
    }
}

#[component]
fn FeaturedCard(product: Product, on_view_product: Callback<()>) -> Element {
    let image = image_or(&product, FEATURED_PLACEHOLDER_IMAGE).to_string();
    let name = product.display_name().to_string();
    let description = description_text(&product).to_string();
    let price = price_text(&product);
    let original_price = original_price_text(&product);

    rsx! {
        div {
            class: "product-card-landing",

            div {
                class: "product-image-container",
                img { class: "product-image-landing", src: "{image}", alt: "{name}" }
                div { class: "product-badge", "Featured" }
            }

            div {
                class: "product-info-landing",
                h3 { class: "product-name-landing", "{name}" }
                p { class: "product-description-landing", "{description}" }
                div {
                    class: "product-price-landing",
                    span { class: "price-current", "{price}" }
                    if let Some(original_price) = original_price {
                        span { class: "price-original", "{original_price}" }
                    }
                }
                button {
                    class: "view-product-btn",
                    onclick: move |_| on_view_product.call(()),
                    "View Product"
                }
            }
        }
    }
}

#[component]
fn CategoryCard(name: String, on_select: Callback<()>) -> Element {
    let (icon, blurb) = category_card(&name);

    rsx! {
        div {
            class: "category-card",
            onclick: move |_| on_select.call(()),
            div { class: "category-icon", "{icon}" }
            h3 { "{name}" }
            p { "{blurb}" }
        }
    }
}

#[component]
fn LandingFooter() -> Element {
    rsx! {
        footer {
            class: "landing-footer",
            div {
                class: "footer-content",
                div {
                    class: "footer-section",
                    h4 { "{STORE_NAME}" }
                    p { "{STORE_TAGLINE}" }
                }
                div {
                    class: "footer-section",
                    h4 { "Quick Links" }
                    a { href: "#products", "Products" }
                    a { href: "#categories", "Categories" }
                    a { href: "#offers", "Offers" }
                }
                div {
                    class: "footer-section",
                    h4 { "Support" }
                    a { href: "#about", "About Us" }
                    a { href: "#contact", "Contact" }
                    a { href: "#terms", "Terms of Service" }
                }
            }
            div {
                class: "footer-bottom",
                p { "© 2024 {STORE_NAME}. All rights reserved." }
            }
        }
    }
}
