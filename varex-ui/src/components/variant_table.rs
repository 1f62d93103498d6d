//! Variant table view - pure rendering, no data fetching or URL handling.
//!
//! The page owns the state; every interaction here builds a whole new
//! `TableDisplayState` and reports it through `on_change`. The page feeds
//! those changes back into this component and into the url-sync
//! controller, so what the table shows and what the URL says never drift.

use dioxus::prelude::*;

use varex_common::{
    Column, SortOrder, SortSpec, SourceVisibility, TableDisplayState, VariantRecord, SOURCES,
};

use crate::stores::VariantTableState;

/// Page sizes offered in the pager.
const PAGE_LENGTHS: [u32; 3] = [20, 50, 100];

/// Variant table view: search box, (research-mode) source and column
/// pickers, sortable header, rows, pager.
#[component]
pub fn VariantTableView(
    state: VariantTableState,
    /// Columns for the current mode (default or research registry).
    columns: Vec<Column>,
    /// Research mode enables source selection and column hiding.
    research_mode: bool,
    /// Called with the full next display state on every interaction.
    on_change: EventHandler<TableDisplayState>,
    /// Row click → variant detail navigation.
    on_row_click: EventHandler<VariantRecord>,
    /// Header help icon click, with the column title.
    on_header_click: EventHandler<String>,
) -> Element {
    let display = state.display.clone();

    let visible_columns: Vec<Column> = columns
        .iter()
        .copied()
        .filter(|c| *display.column_selection.get(c.prop).unwrap_or(&true))
        .collect();

    let page_count = if state.total == 0 {
        1
    } else {
        (state.total as u32).div_ceil(display.page_length)
    };

    let search_state = display.clone();
    let page_length_state = display.clone();
    let page_label = format!("Page {} of {}", display.page + 1, page_count);
    let total_label = format!("{} matching variants", state.total);

    rsx! {
        div { class: "variant-table flex flex-col gap-4",
            div { class: "flex items-center gap-3",
                input {
                    class: "border rounded px-3 py-1.5 w-72",
                    r#type: "search",
                    placeholder: "Search variants",
                    value: "{display.search}",
                    oninput: move |evt: FormEvent| {
                        let mut next = search_state.clone();
                        next.search = evt.value();
                        next.page = 0;
                        on_change.call(next);
                    },
                }
                if state.loading {
                    span { class: "text-sm text-gray-400", "Loading…" }
                }
            }

            if research_mode {
                SourcePicker { display: display.clone(), on_change }
                ColumnPicker { display: display.clone(), columns: columns.clone(), on_change }
            }

            if let Some(err) = state.error.clone() {
                div { class: "text-red-600 text-sm", "{err}" }
            }

            table { class: "w-full text-sm border-collapse",
                thead {
                    tr {
                        for column in visible_columns.clone() {
                            HeaderCell {
                                column,
                                display: display.clone(),
                                on_change,
                                on_header_click,
                            }
                        }
                    }
                    tr {
                        for column in visible_columns.clone() {
                            FilterCell { column, display: display.clone(), on_change }
                        }
                    }
                }
                tbody {
                    for (i, row) in state.rows.iter().enumerate() {
                        {
                            let cells: Vec<String> = visible_columns
                                .iter()
                                .map(|c| row.get(c.prop).unwrap_or_default().to_string())
                                .collect();
                            let clicked = row.clone();
                            rsx! {
                                tr {
                                    key: "{i}",
                                    class: "border-t hover:bg-gray-50 cursor-pointer",
                                    onclick: move |_| on_row_click.call(clicked.clone()),
                                    for cell in cells {
                                        td { class: "px-2 py-1.5", "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "flex items-center gap-3 text-sm",
                {pager_button("Previous", display.page > 0, {
                    let display = display.clone();
                    move |_| on_change.call(page_back(&display))
                })}
                span { "{page_label}" }
                {pager_button("Next", display.page + 1 < page_count, {
                    let display = display.clone();
                    move |_| on_change.call(page_forward(&display))
                })}
                select {
                    class: "border rounded px-1 py-0.5 ml-4",
                    value: "{display.page_length}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(len) = evt.value().parse::<u32>() {
                            let mut next = page_length_state.clone();
                            next.page_length = len;
                            next.page = 0;
                            on_change.call(next);
                        }
                    },
                    for len in PAGE_LENGTHS {
                        option { value: "{len}", "{len} per page" }
                    }
                }
                span { class: "text-gray-500", "{total_label}" }
            }
        }
    }
}

// Saturates at the first page regardless of what the button allowed.
fn page_back(display: &TableDisplayState) -> TableDisplayState {
    let mut next = display.clone();
    next.page = next.page.saturating_sub(1);
    next
}

fn page_forward(display: &TableDisplayState) -> TableDisplayState {
    let mut next = display.clone();
    next.page += 1;
    next
}

fn pager_button(
    label: &'static str,
    enabled: bool,
    onclick: impl FnMut(MouseEvent) + 'static,
) -> Element {
    rsx! {
        button {
            class: "border rounded px-2 py-0.5 disabled:opacity-40",
            disabled: !enabled,
            onclick,
            "{label}"
        }
    }
}

/// Sortable header cell with a help icon.
#[component]
fn HeaderCell(
    column: Column,
    display: TableDisplayState,
    on_change: EventHandler<TableDisplayState>,
    on_header_click: EventHandler<String>,
) -> Element {
    let sorted_here = display.sort_by.prop.as_deref() == Some(column.prop);
    let indicator = match display.sort_by.order {
        Some(SortOrder::Asc) if sorted_here => " ▲",
        Some(SortOrder::Desc) if sorted_here => " ▼",
        _ => "",
    };

    let sort_state = display.clone();
    rsx! {
        th { class: "px-2 py-1.5 text-left font-semibold select-none",
            span {
                class: "cursor-pointer",
                onclick: move |_| {
                    let mut next = sort_state.clone();
                    next.sort_by = SortSpec {
                        prop: Some(column.prop.to_string()),
                        order: Some(if sorted_here {
                            next.sort_by.order.unwrap_or(SortOrder::Asc).toggled()
                        } else {
                            SortOrder::Asc
                        }),
                    };
                    on_change.call(next);
                },
                "{column.title}{indicator}"
            }
            span {
                class: "ml-1 text-gray-400 cursor-help",
                role: "button",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_header_click.call(column.title.to_string());
                },
                "?"
            }
        }
    }
}

/// Per-column filter toggle row.
#[component]
fn FilterCell(
    column: Column,
    display: TableDisplayState,
    on_change: EventHandler<TableDisplayState>,
) -> Element {
    let active = *display.filter_values.get(column.prop).unwrap_or(&false);
    rsx! {
        th { class: "px-2 py-0.5 font-normal",
            label { class: "text-xs text-gray-500 flex items-center gap-1",
                input {
                    r#type: "checkbox",
                    checked: active,
                    onchange: move |_| {
                        let mut next = display.clone();
                        if active {
                            // Canonical state never stores inactive filters.
                            next.filter_values.remove(column.prop);
                        } else {
                            next.filter_values.insert(column.prop.to_string(), true);
                        }
                        next.page = 0;
                        on_change.call(next);
                    },
                }
                "filter"
            }
        }
    }
}

/// Research-mode per-source visibility picker.
#[component]
fn SourcePicker(
    display: TableDisplayState,
    on_change: EventHandler<TableDisplayState>,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap items-center gap-3 text-sm",
            span { class: "font-semibold", "Sources:" }
            for source in SOURCES.iter().copied() {
                {
                    let current = display.source_selection.get(source).copied();
                    let picker_state = display.clone();
                    let value = match current {
                        None => "included",
                        Some(SourceVisibility::Hidden) => "hidden",
                        Some(SourceVisibility::Excluded) => "excluded",
                    };
                    rsx! {
                        label { class: "flex items-center gap-1",
                            "{source}"
                            select {
                                class: "border rounded px-1",
                                value: "{value}",
                                onchange: move |evt: FormEvent| {
                                    let mut next = picker_state.clone();
                                    match evt.value().as_str() {
                                        "hidden" => {
                                            next.source_selection
                                                .insert(source.to_string(), SourceVisibility::Hidden);
                                        }
                                        "excluded" => {
                                            next.source_selection
                                                .insert(source.to_string(), SourceVisibility::Excluded);
                                        }
                                        _ => {
                                            next.source_selection.remove(source);
                                        }
                                    }
                                    next.page = 0;
                                    on_change.call(next);
                                },
                                option { value: "included", "included" }
                                option { value: "hidden", "hidden" }
                                option { value: "excluded", "excluded" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Research-mode column visibility picker.
#[component]
fn ColumnPicker(
    display: TableDisplayState,
    columns: Vec<Column>,
    on_change: EventHandler<TableDisplayState>,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap items-center gap-3 text-sm",
            span { class: "font-semibold", "Columns:" }
            for column in columns {
                {
                    let visible = *display.column_selection.get(column.prop).unwrap_or(&true);
                    let picker_state = display.clone();
                    rsx! {
                        label { class: "flex items-center gap-1",
                            input {
                                r#type: "checkbox",
                                checked: visible,
                                onchange: move |_| {
                                    let mut next = picker_state.clone();
                                    if visible {
                                        next.column_selection.insert(column.prop.to_string(), false);
                                    } else {
                                        // Canonical state leaves visible columns unlisted.
                                        next.column_selection.remove(column.prop);
                                    }
                                    on_change.call(next);
                                },
                            }
                            "{column.title}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_back_saturates_at_first_page() {
        let first = TableDisplayState::default();
        assert_eq!(page_back(&first).page, 0);

        let mut third = TableDisplayState::default();
        third.page = 2;
        assert_eq!(page_back(&third).page, 1);
        assert_eq!(page_forward(&third).page, 3);
    }
}
