//! State stores shared between the web shell and the view components.

pub mod table;

pub use table::*;
