//! Error types for catalog extraction
//!
//! Every failure is fatal to a run. Nothing is written once an error
//! has been raised.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("container alignment requires a container selector")]
    MissingContainerSelector,

    /// Price text without the `=` separating the label from the amount
    #[error("{at} has no '=' delimiter: {text:?}")]
    MissingPriceDelimiter { at: PriceLocation, text: String },

    /// Price text with a delimiter but nothing after it
    #[error("{at} has no value after '=': {text:?}")]
    EmptyPrice { at: PriceLocation, text: String },

    #[error("failed to serialize products: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a malformed price was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLocation {
    /// Position among all price matches in the document
    Match(usize),
    /// Position of the product container holding the price
    Container(usize),
}

impl fmt::Display for PriceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLocation::Match(index) => write!(f, "price #{}", index),
            PriceLocation::Container(index) => write!(f, "price in container #{}", index),
        }
    }
}

impl CatalogError {
    /// Whether the error came from the shape of a price element's text
    pub fn is_extraction_shape(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingPriceDelimiter { .. } | CatalogError::EmptyPrice { .. }
        )
    }
}
