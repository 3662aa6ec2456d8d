//! Listing engine
//!
//! Turns a resolved node and a `ListingConfig` into ordered entries.

mod config;
mod engine;

pub use config::{Detail, ListingConfig, TypeFilter};
pub use engine::{
    Entry, ListingEngine, filter_hidden, filter_type, leaf_label, reversed, sort_by_time,
};
