//! HTML extraction modules
//!
//! `css_extractor` locates elements and reads their text,
//! `price_extractor` turns raw price text into an amount.

mod css_extractor;
mod price_extractor;

pub use css_extractor::*;
pub use price_extractor::*;

use scraper::{Html, Selector};
use tracing::debug;

use crate::config::SelectorConfig;
use crate::error::Result;

/// Selectors compiled once per run
#[derive(Debug)]
pub struct CompiledSelectors {
    pub price: Selector,
    pub code: Selector,
    pub name: Selector,
    pub container: Option<Selector>,
}

impl CompiledSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            price: compile_selector(&config.price)?,
            code: compile_selector(&config.code)?,
            name: compile_selector(&config.name)?,
            container: config.container.as_deref().map(compile_selector).transpose()?,
        })
    }
}

/// Raw text of every match for each field, each list in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldLists {
    pub names: Vec<String>,
    pub prices: Vec<String>,
    pub codes: Vec<String>,
}

/// Run the three field selectors over the whole document
pub fn extract_fields(document: &Html, selectors: &CompiledSelectors) -> FieldLists {
    let prices = select_text(document, &selectors.price);
    let codes = select_text(document, &selectors.code);
    let names = select_text(document, &selectors.name);

    debug!("Matched {} prices: {:?}", prices.len(), prices);
    debug!("Matched {} codes: {:?}", codes.len(), codes);
    debug!("Matched {} names: {:?}", names.len(), names);

    FieldLists {
        names,
        prices,
        codes,
    }
}
