use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::interop::{apply_theme_to_document, browser_theme_resolver};
use crate::session::{ThemePreference, ThemeResolver, ThemeState};

/// Theme handle shared with the component tree.
#[derive(Clone)]
pub struct ThemeContext {
    pub resolver: ThemeResolver,
    pub state: Signal<ThemeState>,
}

/// Create the session's resolver, mirror its state into a signal, keep the
/// document's `data-theme` in sync, and provide a [`ThemeContext`].
pub fn use_theme_provider() -> ThemeContext {
    let resolver = use_hook(browser_theme_resolver);
    let state = use_signal(|| resolver.state());

    let subscription = use_hook(|| {
        apply_theme_to_document(resolver.effective());
        let subscription = resolver.subscribe(move |next| {
            apply_theme_to_document(next.effective);
            let mut state = state;
            state.set(next);
        });
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    use_context_provider(|| ThemeContext {
        resolver: resolver.clone(),
        state,
    })
}

/// Device is labelled as such even when it currently renders like an explicit choice.
pub fn toggle_label(state: ThemeState) -> &'static str {
    state.preference.label()
}

pub fn option_class(option: ThemePreference, state: ThemeState) -> &'static str {
    if option == state.preference {
        "theme-option active"
    } else {
        "theme-option"
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_context::<ThemeContext>();
    let mut is_open = use_signal(|| false);
    let state = (theme.state)();

    let resolver = theme.resolver.clone();
    let select = use_callback(move |preference: ThemePreference| {
        resolver.set_preference(preference);
        is_open.set(false);
    });

    let icon = state.effective.icon();
    let label = toggle_label(state);

    rsx! {
        div {
            class: "theme-toggle-container",

            button {
                class: "theme-toggle-button",
                title: "Toggle theme",
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                "{icon}"
                span { class: "theme-label", "{label}" }
            }

            if is_open() {
                div {
                    class: "theme-dropdown",

                    for option in ThemePreference::ALL {
                        button {
                            class: option_class(option, state),
                            onclick: move |_| select.call(option),
                            {format!("{} {}", option.icon(), option.label())}
                        }
                    }
                }
            }
        }
    }
}
