use dioxus::prelude::*;

use crate::session::CartCount;

const CART_PATH: &str =
    "M3 3h18l-2 9H5L3 3zM8.5 18a1.5 1.5 0 100 3 1.5 1.5 0 000-3zm7 0a1.5 1.5 0 100 3 1.5 1.5 0 000-3z";

pub fn badge_class(count: CartCount) -> &'static str {
    if count.is_known() {
        "cart-badge"
    } else {
        "cart-badge cart-badge--loading"
    }
}

#[component]
pub fn CartIcon(count: CartCount, on_open_cart: Callback<()>) -> Element {
    let badge = count.badge_text();

    rsx! {
        div {
            class: "cart-icon",
            title: "View cart",
            onclick: move |_| on_open_cart.call(()),

            svg {
                class: "cart-icon-svg",
                fill: "none",
                view_box: "0 0 24 24",
                stroke_width: "1.5",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    d: CART_PATH,
                }
            }
            span { class: badge_class(count), "{badge}" }
        }
    }
}
