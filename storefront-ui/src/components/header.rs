use dioxus::prelude::*;

use crate::components::cart_icon::CartIcon;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::STORE_NAME;
use crate::session::CartCountAdapter;

/// Header for signed-in shop pages. The cart collaborator owns `cart` and
/// updates it as the cart loads; the badge shows loading until then.
#[component]
pub fn Header(cart: CartCountAdapter, username: String, on_open_cart: Callback<()>) -> Element {
    rsx! {
        header {
            class: "header",

            div {
                class: "landing-logo",
                h1 { "{STORE_NAME}" }
            }

            div {
                class: "header-actions",
                ThemeToggle {}
                CartIcon { count: cart.get(), on_open_cart }
                span { class: "header-username", "{username}" }
            }
        }
    }
}
