//! Price extraction
//!
//! Catalog prices are rendered as `<label> = <amount> <currency>`, e.g.
//! `Цена: = 199.99 ман`. The amount is the first token after the `=`.

use tracing::warn;

use crate::config::PricePolicy;
use crate::error::{CatalogError, PriceLocation, Result};

/// Pull the amount out of one price element's text.
///
/// `at` only serves to make errors traceable.
pub fn parse_price(at: PriceLocation, text: &str) -> Result<String> {
    let (_, rest) = text
        .split_once('=')
        .ok_or_else(|| CatalogError::MissingPriceDelimiter {
            at,
            text: text.to_string(),
        })?;

    rest.split_whitespace()
        .next()
        .map(String::from)
        .ok_or_else(|| CatalogError::EmptyPrice {
            at,
            text: text.to_string(),
        })
}

/// Parse a whole list of price texts under `policy`.
///
/// Under [`PricePolicy::Skip`] a malformed entry becomes `None` so the list
/// keeps its positions.
pub fn parse_prices(texts: &[String], policy: PricePolicy) -> Result<Vec<Option<String>>> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| match parse_price(PriceLocation::Match(index), text) {
            Ok(price) => Ok(Some(price)),
            Err(e) if policy == PricePolicy::Skip && e.is_extraction_shape() => {
                warn!("Skipping price: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        })
        .collect()
}
