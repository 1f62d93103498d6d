//! Flat URL query form of the table display state, and the codec between
//! the two.
//!
//! The parameter names and encodings here are the wire contract for
//! bookmarked links; old URLs must keep decoding, so nothing in this
//! module may change shape without a compatibility plan.
//!
//! Decoding is fail-soft by design: absent fields take their documented
//! defaults and malformed ones are logged and defaulted rather than
//! surfaced as errors.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::table_state::{
    SortOrder, SortSpec, SourceVisibility, TableDisplayState, DEFAULT_PAGE_LENGTH,
};
use crate::text;

/// Query parameters exactly as they travel in the URL.
///
/// Scalars stay as the strings they arrived as; arrays keep their wire
/// order. `filter` and `filter_value` are positionally paired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub search: Option<String>,
    pub filter: Vec<String>,
    pub filter_value: Vec<String>,
    pub hide: Vec<String>,
    pub hide_sources: Vec<String>,
    pub exclude_sources: Vec<String>,
    pub order_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub page_length: Option<String>,
}

impl QueryParams {
    pub fn is_empty(&self) -> bool {
        *self == QueryParams::default()
    }

    /// Parse a raw query string (without the leading `?`). Unknown keys are
    /// ignored; repeated scalar keys keep the last value, repeated array
    /// keys accumulate in order.
    pub fn from_query_string(query: &str) -> QueryParams {
        let mut params = QueryParams::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "search" => params.search = Some(value),
                "filter" => params.filter.push(value),
                "filterValue" => params.filter_value.push(value),
                "hide" => params.hide.push(value),
                "hideSources" => params.hide_sources.push(value),
                "excludeSources" => params.exclude_sources.push(value),
                "orderBy" => params.order_by = Some(value),
                "order" => params.order = Some(value),
                "page" => params.page = Some(value),
                "pageLength" => params.page_length = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Serialize to a query string (without the leading `?`). Absent fields
    /// and empty arrays produce no pairs, so a default state serializes to
    /// the empty string.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if let Some(search) = &self.search {
            ser.append_pair("search", search);
        }
        for v in &self.filter {
            ser.append_pair("filter", v);
        }
        for v in &self.filter_value {
            ser.append_pair("filterValue", v);
        }
        for v in &self.hide {
            ser.append_pair("hide", v);
        }
        for v in &self.hide_sources {
            ser.append_pair("hideSources", v);
        }
        for v in &self.exclude_sources {
            ser.append_pair("excludeSources", v);
        }
        if let Some(order_by) = &self.order_by {
            ser.append_pair("orderBy", order_by);
        }
        if let Some(order) = &self.order {
            ser.append_pair("order", order);
        }
        if let Some(page) = &self.page {
            ser.append_pair("page", page);
        }
        if let Some(page_length) = &self.page_length {
            ser.append_pair("pageLength", page_length);
        }
        ser.finish()
    }
}

/// Build the structured display state from URL query parameters.
///
/// Every field tolerates absence by taking its default. Source names
/// appearing in both `hideSources` and `excludeSources` end up excluded
/// (last write wins). A `filter`/`filterValue` length mismatch truncates to
/// the shorter array; that mirrors the historical behavior and is logged
/// so it stays observable.
pub fn decode(params: &QueryParams) -> TableDisplayState {
    let mut source_selection = BTreeMap::new();
    for name in &params.hide_sources {
        source_selection.insert(name.clone(), SourceVisibility::Hidden);
    }
    for name in &params.exclude_sources {
        source_selection.insert(name.clone(), SourceVisibility::Excluded);
    }

    if params.filter.len() != params.filter_value.len() {
        tracing::warn!(
            filters = params.filter.len(),
            values = params.filter_value.len(),
            "filter/filterValue arrays differ in length; extra entries dropped"
        );
    }
    let filter_values = params
        .filter
        .iter()
        .zip(&params.filter_value)
        .map(|(col, value)| (col.clone(), value == "true"))
        .collect();

    TableDisplayState {
        search: params.search.clone().unwrap_or_default(),
        sort_by: SortSpec {
            prop: params.order_by.clone(),
            order: params.order.as_deref().and_then(SortOrder::parse),
        },
        column_selection: params
            .hide
            .iter()
            .map(|col| (col.clone(), false))
            .collect(),
        source_selection,
        filter_values,
        page: parse_count("page", params.page.as_deref(), 0),
        page_length: match parse_count(
            "pageLength",
            params.page_length.as_deref(),
            DEFAULT_PAGE_LENGTH,
        ) {
            // Page length must stay positive for the pager arithmetic.
            0 => DEFAULT_PAGE_LENGTH,
            n => n,
        },
    }
}

/// Build the minimal query-parameter form of a display state.
///
/// Canonical: any field equal to its default is omitted entirely, so the
/// default state encodes to an empty mapping and URLs stay short. The
/// search text is normalized through [`text::trim_search_term`] on the way
/// out.
pub fn encode(state: &TableDisplayState) -> QueryParams {
    let (filter, filter_value) = state
        .filter_values
        .iter()
        .filter(|(_, active)| **active)
        .map(|(col, _)| (col.clone(), "true".to_string()))
        .unzip();

    QueryParams {
        search: if state.search.is_empty() {
            None
        } else {
            Some(text::trim_search_term(&state.search))
        },
        filter,
        filter_value,
        hide: state
            .column_selection
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(col, _)| col.clone())
            .collect(),
        hide_sources: sources_with(state, SourceVisibility::Hidden),
        exclude_sources: sources_with(state, SourceVisibility::Excluded),
        order_by: state.sort_by.prop.clone(),
        order: state.sort_by.order.map(|o| o.as_str().to_string()),
        page: (state.page != 0).then(|| state.page.to_string()),
        page_length: (state.page_length != DEFAULT_PAGE_LENGTH)
            .then(|| state.page_length.to_string()),
    }
}

fn sources_with(state: &TableDisplayState, visibility: SourceVisibility) -> Vec<String> {
    state
        .source_selection
        .iter()
        .filter(|(_, v)| **v == visibility)
        .map(|(name, _)| name.clone())
        .collect()
}

fn parse_count(name: &str, value: Option<&str>, default: u32) -> u32 {
    match value {
        None => default,
        Some(text) => match text.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(param = name, value = text, "non-numeric query parameter; using default");
                default
            }
        },
    }
}
