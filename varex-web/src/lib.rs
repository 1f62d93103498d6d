//! varex web frontend: routes and app shell.

pub mod api;
pub mod content;
pub mod mode_storage;
pub mod pages;

use std::fmt;

use dioxus::prelude::*;
use dioxus::router::routable::FromQuery;

use pages::{About, AppLayout, Help, Home, VariantDetail, Variants};
use varex_common::QueryParams;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/about/:page")]
    About { page: String },
    #[route("/help#:fragment")]
    Help { fragment: String },
    #[route("/variants?:..query")]
    Variants { query: VariantsQuery },
    #[route("/variant/:id")]
    VariantDetail { id: String },
}

/// Wire form of the variants page query, carried whole through the router
/// so the table page can decode it with the shared codec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantsQuery(pub QueryParams);

impl FromQuery for VariantsQuery {
    fn from_query(query: &str) -> Self {
        VariantsQuery(QueryParams::from_query_string(query))
    }
}

impl fmt::Display for VariantsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_query_string())
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
