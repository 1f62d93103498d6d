//! Canonical in-memory form of the variant table's display settings.

use std::collections::BTreeMap;

/// Rows per page when the URL says nothing else.
pub const DEFAULT_PAGE_LENGTH: u32 = 20;

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire text used in the `order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parse wire text. Anything other than `asc`/`desc` is treated as unsorted.
    pub fn parse(text: &str) -> Option<SortOrder> {
        match text {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// Flip the direction (header re-click).
    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Active sort: which column prop and which direction.
///
/// `prop` is a free-form column name carried through from the URL without
/// validation; the table simply ignores props it does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub prop: Option<String>,
    pub order: Option<SortOrder>,
}

/// Visibility of a data source. Absent from the selection map = fully included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceVisibility {
    /// Hidden from view but still toggleable in the source picker (wire `0`).
    Hidden,
    /// Excluded from the query entirely (wire `-1`).
    Excluded,
}

/// Everything about how the variant table is currently displayed.
///
/// Owned by the table page and mutated only through its interaction
/// handlers; mirrored into the URL by the url-sync controller so results
/// stay bookmarkable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDisplayState {
    /// Free-text search query.
    pub search: String,
    /// Active sort column and direction.
    pub sort_by: SortSpec,
    /// Column prop -> visible. `false` means hidden; absent means visible.
    pub column_selection: BTreeMap<String, bool>,
    /// Source name -> visibility. Absent means fully included.
    pub source_selection: BTreeMap<String, SourceVisibility>,
    /// Column prop -> filter active.
    pub filter_values: BTreeMap<String, bool>,
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page.
    pub page_length: u32,
}

impl Default for TableDisplayState {
    fn default() -> Self {
        TableDisplayState {
            search: String::new(),
            sort_by: SortSpec::default(),
            column_selection: BTreeMap::new(),
            source_selection: BTreeMap::new(),
            filter_values: BTreeMap::new(),
            page: 0,
            page_length: DEFAULT_PAGE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = TableDisplayState::default();
        assert_eq!(state.search, "");
        assert_eq!(state.page, 0);
        assert_eq!(state.page_length, 20);
        assert_eq!(state.sort_by, SortSpec::default());
        assert!(state.column_selection.is_empty());
        assert!(state.source_selection.is_empty());
        assert!(state.filter_values.is_empty());
    }

    #[test]
    fn test_sort_order_wire_text() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("descending"), None);
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }
}
