use dioxus::prelude::*;

use varex_common::text::slugify;

use crate::content;
use crate::pages::use_mode;

/// Must match the nav height in main.css, so anchored sections are not
/// hidden under the nav bar.
const NAV_HEIGHT: f64 = 70.0;

#[component]
pub fn Help(fragment: String) -> Element {
    let mode = use_mode();
    let html = if mode.mode().is_research() {
        content::page("helpResearch")
    } else {
        content::page("help")
    }
    .unwrap_or_default();

    let anchor = slugify(&fragment);
    use_effect(move || {
        if !anchor.is_empty() {
            scroll_to_anchor(&anchor);
        }
    });

    rsx! {
        div { class: "container mx-auto py-8 max-w-3xl",
            div { dangerous_inner_html: html }
        }
    }
}

fn scroll_to_anchor(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(el) = document.get_element_by_id(id) {
        let top = el.get_bounding_client_rect().top();
        window.scroll_to_with_x_and_y(0.0, top - NAV_HEIGHT);
    }
}
