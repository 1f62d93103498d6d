//! UI state and view components for the varex variant browser.
//!
//! Holds everything the web shell needs that is not a page: the variant
//! table view, the debounced url-sync controller, the display-mode
//! settings service, and the table's state store.

pub mod components;
pub mod mode;
pub mod stores;
pub mod url_sync;

pub use components::VariantTableView;
pub use mode::{use_mode_service, ModePersistence, ModeService};
pub use stores::VariantTableState;
pub use url_sync::{run_url_sync, use_url_sync, UrlSync, URL_SYNC_QUIET_MS};
