use dioxus::prelude::*;

use varex_common::QueryParams;

use crate::content;
use crate::{Route, VariantsQuery};

#[component]
pub fn Home() -> Element {
    let mut search = use_signal(String::new);
    let html = content::page("home").unwrap_or_default();

    rsx! {
        div { class: "container mx-auto py-10 max-w-3xl flex flex-col gap-8",
            form {
                class: "flex gap-2",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let term = search.peek().clone();
                    let query = QueryParams {
                        search: (!term.is_empty()).then_some(term),
                        ..QueryParams::default()
                    };
                    navigator().push(Route::Variants {
                        query: VariantsQuery(query),
                    });
                },
                input {
                    class: "border rounded px-3 py-2 flex-grow",
                    r#type: "search",
                    placeholder: "Search for a variant, e.g. brca1 or c.1105G>A",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                button { class: "border rounded px-4 py-2", r#type: "submit", "Search" }
            }
            div { class: "jumbotron", dangerous_inner_html: html }
        }
    }
}
