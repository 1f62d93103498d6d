use std::rc::Rc;

use dioxus::prelude::*;

use varex_ui::{use_mode_service, ModeService};

use crate::mode_storage::LocalStorageModePersistence;
use crate::{Route, VariantsQuery};

#[component]
pub fn AppLayout() -> Element {
    let mode = use_mode_service(Rc::new(LocalStorageModePersistence));
    use_context_provider(|| mode.clone());

    let mode_label = if mode.mode().is_research() {
        "All public data"
    } else {
        "Expert reviewed only"
    };

    rsx! {
        nav { class: "flex items-center gap-6 px-6 py-4 border-b",
            span { class: "font-bold text-lg", "Variant Exchange" }
            Link { class: "hover:underline", to: Route::Home {}, "Home" }
            Link {
                class: "hover:underline",
                to: Route::Variants { query: VariantsQuery::default() },
                "Variants"
            }
            Link {
                class: "hover:underline",
                to: Route::Help { fragment: String::new() },
                "Help"
            }
            Link {
                class: "hover:underline",
                to: Route::About { page: "history".to_string() },
                "About"
            }
            span { class: "ml-auto text-sm text-gray-500", "{mode_label}" }
        }
        Outlet::<Route> {}
        Footer {}
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "flex items-center gap-6 px-6 py-4 border-t text-sm text-gray-500",
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::About { page: "history".to_string() }, "About" }
            Link { to: Route::Variants { query: VariantsQuery::default() }, "Variants" }
            Link { to: Route::Help { fragment: String::new() }, "Help" }
            a {
                class: "ml-auto hover:underline",
                href: "mailto:contact@variant-exchange.example?subject=Variant Exchange website",
                "Contact us"
            }
        }
    }
}

/// Typed accessor for the mode service provided by the layout.
pub fn use_mode() -> ModeService {
    use_context::<ModeService>()
}
