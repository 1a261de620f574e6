//! Catalog page product extractor
//!
//! Reads a saved HTML catalog page and writes its products as JSON:
//! - CSS selectors locate product names, prices and codes
//! - Prices are reduced to the amount following `=`
//! - Fields are paired by document order, or per product card
//! - Every product gets a random v4 UUID

pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod output;
pub mod pipeline;

pub use catalog::Product;
pub use config::{AlignmentMode, CatalogConfig, PricePolicy, SelectorConfig};
pub use error::{CatalogError, PriceLocation, Result};
pub use pipeline::{render, run, RunSummary};
