//! Backend API client for variant data.
//!
//! The backend speaks the same wire dialect as the page URL for its data
//! endpoint, except paging is always explicit.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::form_urlencoded;

use varex_common::{params, TableDisplayState, VariantRecord};

/// Response envelope from `/backend/data`.
#[derive(Deserialize)]
struct DataEnvelope {
    count: usize,
    data: Vec<BTreeMap<String, String>>,
}

/// One fetched page of variants plus the total match count.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantPage {
    pub total: usize,
    pub rows: Vec<VariantRecord>,
}

/// Absolute URL for the data endpoint. `reqwest` rejects relative URLs,
/// so the page origin is resolved explicitly.
fn data_url(query: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    format!("{origin}/backend/data?{query}")
}

/// Fetch the page of variants matching the given display settings.
pub async fn fetch_variants(display: &TableDisplayState) -> Result<VariantPage, String> {
    let mut query = params::encode(display);
    query.page = Some(display.page.to_string());
    query.page_length = Some(display.page_length.to_string());
    let url = data_url(&query.to_query_string());

    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    let envelope: DataEnvelope = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

    Ok(VariantPage {
        total: envelope.count,
        rows: envelope
            .data
            .into_iter()
            .map(|fields| VariantRecord { fields })
            .collect(),
    })
}

/// Fetch a single variant by its identity key fields (from the
/// `/variant/:id` path).
pub async fn fetch_variant(
    key: &BTreeMap<String, String>,
) -> Result<Option<VariantRecord>, String> {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (column, value) in key {
        ser.append_pair("filter", column);
        ser.append_pair("filterValue", value);
    }
    ser.append_pair("pageLength", "1");
    let url = data_url(&ser.finish());

    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    let envelope: DataEnvelope = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

    Ok(envelope
        .data
        .into_iter()
        .next()
        .map(|fields| VariantRecord { fields }))
}
