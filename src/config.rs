//! Run configuration
//!
//! Built-in defaults describe the catalog page layout this tool was written
//! for. A JSON file can override any subset of them; the CLI applies its
//! flags on top of that.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub const DEFAULT_INPUT: &str = "catalog.html";
pub const DEFAULT_OUTPUT: &str = "./src/products.json";

pub const DEFAULT_PRICE_SELECTOR: &str = "span.price-new";
pub const DEFAULT_CODE_SELECTOR: &str = "span.ml-1";
/// The whole `class` attribute must read `title text-dots`, nothing more
pub const DEFAULT_NAME_SELECTOR: &str = r#"h6[class="title text-dots"]"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// HTML page to read
    pub input: PathBuf,
    /// JSON file to overwrite
    pub output: PathBuf,
    pub selectors: SelectorConfig,
    pub alignment: AlignmentMode,
    pub price_policy: PricePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            selectors: SelectorConfig::default(),
            alignment: AlignmentMode::default(),
            price_policy: PricePolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Load a config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// CSS selectors for the three product fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub price: String,
    pub code: String,
    pub name: String,
    /// One element per product card, required by [`AlignmentMode::Container`]
    pub container: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE_SELECTOR.to_string(),
            code: DEFAULT_CODE_SELECTOR.to_string(),
            name: DEFAULT_NAME_SELECTOR.to_string(),
            container: None,
        }
    }
}

/// How names, prices and codes are matched up into products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMode {
    /// Zip the three document-order match lists by index
    #[default]
    Positional,
    /// Read all three fields from inside each container element
    Container,
}

/// What to do with price text that does not contain `= <amount>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePolicy {
    /// Abort the run
    #[default]
    FailFast,
    /// Drop the malformed entry and keep going
    Skip,
}
