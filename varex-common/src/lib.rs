//! Shared pure logic for the varex variant browser.
//!
//! Everything in this crate is side-effect free and usable from both the
//! UI crates and tests: table display state, the URL query-parameter codec,
//! text normalization, the variant identity path codec, the column
//! registry, and the display mode enum.

pub mod columns;
pub mod mode;
pub mod params;
pub mod record;
pub mod table_state;
pub mod text;
pub mod variant_path;

pub use columns::{Column, DATABASE_KEY, DEFAULT_COLUMNS, RESEARCH_COLUMNS, SOURCES};
pub use mode::{DisplayMode, MODE_STORAGE_KEY};
pub use params::{decode, encode, QueryParams};
pub use record::VariantRecord;
pub use table_state::{SortOrder, SortSpec, SourceVisibility, TableDisplayState};
