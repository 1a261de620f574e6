//! CSS selector-based extraction
//!
//! Uses the scraper crate to select elements by CSS selectors. Text is
//! returned exactly as it appears in the markup, whitespace included.

use scraper::{ElementRef, Html, Selector};

use crate::error::{CatalogError, Result};

/// Compile a CSS selector, surfacing the parser's complaint on failure
pub fn compile_selector(selector_str: &str) -> Result<Selector> {
    Selector::parse(selector_str).map_err(|e| CatalogError::InvalidSelector {
        selector: selector_str.to_string(),
        reason: e.to_string(),
    })
}

/// Concatenated text of every descendant text node
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text content of all elements matching `selector`, in document order
pub fn select_text(document: &Html, selector: &Selector) -> Vec<String> {
    document.select(selector).map(element_text).collect()
}

/// Text of the first match of `selector` inside `scope`
pub fn select_first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

/// Parse `html` and extract the text of elements matching `selector_str`
pub fn extract_css_text(html: &str, selector_str: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = compile_selector(selector_str)?;
    Ok(select_text(&document, &selector))
}
