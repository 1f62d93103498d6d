use dioxus::prelude::*;

use crate::content;

#[component]
pub fn About(page: String) -> Element {
    let html = content::page(&page).unwrap_or("<p>Page not found.</p>");

    rsx! {
        div { class: "container mx-auto py-8 max-w-3xl",
            div { dangerous_inner_html: html }
        }
    }
}
