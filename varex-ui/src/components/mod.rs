//! Shared UI components

pub mod variant_table;

pub use variant_table::VariantTableView;
