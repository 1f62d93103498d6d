use dioxus::prelude::*;

use varex_common::text::slugify;
use varex_common::{
    params, variant_path, Column, QueryParams, TableDisplayState, VariantRecord, DEFAULT_COLUMNS,
    RESEARCH_COLUMNS,
};
use varex_ui::{use_url_sync, VariantTableState, VariantTableView};

use crate::api;
use crate::content;
use crate::pages::use_mode;
use crate::{Route, VariantsQuery};

#[component]
pub fn Variants(query: VariantsQuery) -> Element {
    let mode = use_mode();
    let research = mode.mode().is_research();

    // The table's display settings live here; the URL follows via the
    // debounced sync pump, and the pump's navigation feeds back through
    // the `query` prop.
    let mut display = use_signal(|| decode_for_mode(&query, research));
    let mut last_query = use_signal(|| query.clone());

    // Back/forward (or a sync flush) changed the URL: re-adopt it. After a
    // flush, decode(encode(s)) reproduces s, so this is a no-op and the
    // table does not visibly reset.
    if *last_query.peek() != query {
        last_query.set(query.clone());
        let decoded = decode_for_mode(&query, research);
        if *display.peek() != decoded {
            display.set(decoded);
        }
    }

    // Mode toggles do not go through the URL, so the mode rules are
    // re-applied to the held state too. Leaving research mode drops any
    // column hiding the state still carries; guarded so it settles.
    if !research && !display.peek().column_selection.is_empty() {
        let cleared = for_mode(display.peek().clone(), research);
        display.set(cleared);
    }

    let mode_for_fetch = mode.clone();
    let resource = use_resource(move || {
        let state = display();
        // Read the mode so toggling refetches.
        let _ = mode_for_fetch.mode();
        async move {
            api::fetch_variants(&state).await.inspect_err(|e| {
                tracing::error!(error = e.as_str(), "variant fetch failed");
            })
        }
    });

    let fetched = resource.read();
    let (rows, total, loading, error) = match &*fetched {
        None => (Vec::new(), 0, true, None),
        Some(Ok(page)) => (page.rows.clone(), page.total, false, None),
        Some(Err(e)) => (Vec::new(), 0, false, Some(e.clone())),
    };
    drop(fetched);

    let nav = navigator();
    let router = router();
    let sync = use_url_sync(
        move |query: QueryParams| {
            nav.push(Route::Variants {
                query: VariantsQuery(query),
            });
        },
        move || router.full_route_string().starts_with("/variants"),
    );

    let columns: Vec<Column> = if research {
        RESEARCH_COLUMNS.to_vec()
    } else {
        DEFAULT_COLUMNS.to_vec()
    };

    let message_html = content::page(if research {
        "variantsResearch"
    } else {
        "variantsDefault"
    })
    .unwrap_or_default();

    let mut show_modal = use_signal(|| false);
    let mut mode_for_leave = mode.clone();
    let mut mode_for_enter = mode.clone();

    let table_state = VariantTableState {
        display: display(),
        rows,
        total,
        loading,
        error,
    };

    rsx! {
        div { class: "container mx-auto py-6 flex flex-col gap-4",
            div { class: "border rounded p-3 bg-yellow-50 text-sm flex items-center gap-4",
                div { class: "flex-grow", dangerous_inner_html: message_html }
                if research {
                    button {
                        class: "border rounded px-2 py-1 whitespace-nowrap",
                        onclick: move |_| mode_for_leave.toggle(),
                        "Show Expert Reviewed Data Only"
                    }
                } else {
                    button {
                        class: "border rounded px-2 py-1 whitespace-nowrap",
                        onclick: move |_| show_modal.set(true),
                        "Show All Public Data"
                    }
                }
            }

            if show_modal() {
                div { class: "fixed inset-0 bg-black/40 flex items-center justify-center",
                    div { class: "bg-white rounded p-6 max-w-md flex flex-col gap-4",
                        div { dangerous_inner_html: content::page("researchWarning").unwrap_or_default() }
                        div { class: "flex gap-3",
                            button {
                                class: "border rounded px-3 py-1",
                                onclick: move |_| {
                                    mode_for_enter.toggle();
                                    show_modal.set(false);
                                },
                                "Yes"
                            }
                            button {
                                class: "border rounded px-3 py-1",
                                onclick: move |_| show_modal.set(false),
                                "No"
                            }
                        }
                    }
                }
            }

            VariantTableView {
                state: table_state,
                columns,
                research_mode: research,
                on_change: move |next: TableDisplayState| {
                    display.set(next.clone());
                    sync.state_changed(next);
                },
                on_row_click: move |row: VariantRecord| {
                    nav.push(Route::VariantDetail {
                        id: variant_path::join(&row),
                    });
                },
                on_header_click: move |title: String| {
                    nav.push(Route::Help {
                        fragment: slugify(&title),
                    });
                },
            }
        }
    }
}

/// Decode the URL query for the current mode.
fn decode_for_mode(query: &VariantsQuery, research: bool) -> TableDisplayState {
    for_mode(params::decode(&query.0), research)
}

/// Apply the mode rules to a display state. Column hiding is a
/// research-mode concern; the default view always shows its full column
/// set, whether the state came from the URL or from a mode toggle.
fn for_mode(mut state: TableDisplayState, research: bool) -> TableDisplayState {
    if !research {
        state.column_selection.clear();
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaving_research_mode_clears_column_hiding() {
        let query = VariantsQuery(QueryParams::from_query_string(
            "hide=Gene_symbol&search=brca1",
        ));
        let in_research = decode_for_mode(&query, true);
        assert_eq!(in_research.column_selection.get("Gene_symbol"), Some(&false));

        // The flip back to default applies to already-held state, not just
        // at decode time.
        let in_default = for_mode(in_research, false);
        assert!(in_default.column_selection.is_empty());
        assert_eq!(in_default.search, "brca1");
    }

    #[test]
    fn test_research_mode_keeps_column_hiding() {
        let query = VariantsQuery(QueryParams::from_query_string("hide=Source"));
        let state = decode_for_mode(&query, true);
        assert_eq!(for_mode(state.clone(), true), state);
    }
}
