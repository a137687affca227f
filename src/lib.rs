//! Library entry for Glossa exposing locale resolution and translation lookup.

pub mod i18n;
pub mod paths;
pub mod store;
