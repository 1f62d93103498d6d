//! Variant table state store.

use varex_common::{TableDisplayState, VariantRecord};

/// Everything the variants page holds about the table: display settings
/// plus the currently fetched slice of data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantTableState {
    /// Display settings (search, sort, visibility, pagination). Mirrored
    /// into the URL by the url-sync controller.
    pub display: TableDisplayState,
    /// Rows for the current page.
    pub rows: Vec<VariantRecord>,
    /// Total row count across all pages, for the pager.
    pub total: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Error message if the last fetch failed.
    pub error: Option<String>,
}
