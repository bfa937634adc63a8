// src/catalog/mod.rs
//! The niche catalog: a flat keyword table loaded once at startup,
//! normalized, and immutable for the life of the process.

mod load;
mod parse;
mod types;

pub use load::load_catalog;
pub use parse::{normalize_category, parse_competing_products, parse_search_volume};
pub use types::{Niche, NicheCatalog, VolumeLabel};
