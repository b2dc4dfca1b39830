use dioxus::prelude::*;
use shared_types::Product;

use crate::components::format::{
    description_text, image_or, price_text, stock_text, LIST_PLACEHOLDER_IMAGE,
};

/// Add-to-cart needs an id and stock that is not known to be exhausted.
pub fn can_add_to_cart(product: &Product) -> bool {
    product.id().is_some() && product.in_stock() != Some(false)
}

#[component]
pub fn ProductList(products: Vec<Product>, on_add_to_cart: Callback<i64>) -> Element {
    if products.is_empty() {
        return rsx! {
            p { class: "no-products", "No products available." }
        };
    }

    rsx! {
        div {
            class: "product-list",
            div {
                class: "product-grid",
                for product in products {
                    ProductCard { product: product.clone(), on_add_to_cart }
                }
            }
        }
    }
}

#[component]
pub fn ProductCard(product: Product, on_add_to_cart: Callback<i64>) -> Element {
    let mut image_failed = use_signal(|| false);

    let image = if image_failed() {
        LIST_PLACEHOLDER_IMAGE.to_string()
    } else {
        image_or(&product, LIST_PLACEHOLDER_IMAGE).to_string()
    };
    let name = product.display_name().to_string();
    let description = description_text(&product).to_string();
    let price = price_text(&product);
    let stock = stock_text(&product);
    let stock_class = if product.in_stock() == Some(false) {
        "product-stock product-stock--out"
    } else {
        "product-stock"
    };
    let enabled = can_add_to_cart(&product);
    let button_label = if product.in_stock() == Some(false) {
        "Out of Stock"
    } else {
        "Add to Cart"
    };
    let product_id = product.id();

    rsx! {
        div {
            class: "product-card",

            div {
                class: "product-image-wrapper",
                img {
                    class: "product-image",
                    src: "{image}",
                    alt: "{name}",
                    onerror: move |_| image_failed.set(true),
                }
            }

            div {
                class: "product-info",
                h3 { class: "product-name", "{name}" }
                p { class: "product-description", "{description}" }
                div {
                    class: "product-price-section",
                    span { class: "product-price", "{price}" }
                    if let Some(stock) = stock {
                        span { class: stock_class, "{stock}" }
                    }
                }
                button {
                    class: "add-to-cart-btn",
                    disabled: !enabled,
                    onclick: move |_| {
                        if let Some(id) = product_id {
                            on_add_to_cart.call(id);
                        }
                    },
                    "{button_label}"
                }
            }
        }
    }
}
