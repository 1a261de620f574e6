//! Product records and the two ways of assembling them

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PricePolicy;
use crate::error::{PriceLocation, Result};
use crate::extractors::{parse_price, select_first_text, CompiledSelectors};

/// One catalog entry. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub code: String,
}

impl Product {
    /// Create a record with a fresh random id
    pub fn new(name: String, price: String, code: String) -> Self {
        Self::with_id(Uuid::new_v4(), name, price, code)
    }

    pub fn with_id(id: Uuid, name: String, price: String, code: String) -> Self {
        Self {
            id,
            name,
            price,
            code,
        }
    }
}

/// Zip names, prices and codes by index.
///
/// The result is at most as long as the shortest list. Nothing ties the
/// lists together except document order. A `None` price drops that index.
pub fn assemble_positional(
    names: Vec<String>,
    prices: Vec<Option<String>>,
    codes: Vec<String>,
) -> Vec<Product> {
    if names.len() != prices.len() || names.len() != codes.len() {
        warn!(
            "Field counts differ (names={}, prices={}, codes={}); truncating to the shortest",
            names.len(),
            prices.len(),
            codes.len()
        );
    }

    names
        .into_iter()
        .zip(prices)
        .zip(codes)
        .filter_map(|((name, price), code)| price.map(|price| Product::new(name, price, code)))
        .collect()
}

/// Result of container-scoped assembly
#[derive(Debug, Default)]
pub struct ContainerAssembly {
    pub products: Vec<Product>,
    pub containers: usize,
    /// Cards dropped for a missing field or, under [`PricePolicy::Skip`], a malformed price
    pub skipped: usize,
}

/// Build one product per container element, reading each field from the
/// first match inside that container.
pub fn assemble_from_containers(
    document: &Html,
    selectors: &CompiledSelectors,
    container: &scraper::Selector,
    policy: PricePolicy,
) -> Result<ContainerAssembly> {
    let mut assembly = ContainerAssembly::default();

    for (index, card) in document.select(container).enumerate() {
        assembly.containers += 1;

        let name = select_first_text(card, &selectors.name);
        let code = select_first_text(card, &selectors.code);
        let price_text = select_first_text(card, &selectors.price);

        let (Some(name), Some(price_text), Some(code)) = (name, price_text, code) else {
            debug!("Container #{} lacks a name, price or code; skipping", index);
            assembly.skipped += 1;
            continue;
        };

        let price = match parse_price(PriceLocation::Container(index), &price_text) {
            Ok(price) => price,
            Err(e) if policy == PricePolicy::Skip && e.is_extraction_shape() => {
                warn!("Skipping container #{}: {}", index, e);
                assembly.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        assembly.products.push(Product::new(name, price, code));
    }

    Ok(assembly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::error::CatalogError;
    use crate::extractors::compile_selector;
    use std::collections::HashSet;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn prices(items: &[&str]) -> Vec<Option<String>> {
        items.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_positional_truncates_to_shortest() {
        let products = assemble_positional(
            strings(&["A", "B", "C"]),
            prices(&["1", "2"]),
            strings(&["a", "b", "c", "d"]),
        );
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "B");
        assert_eq!(products[1].price, "2");
        assert_eq!(products[1].code, "b");
    }

    #[test]
    fn test_positional_empty_field() {
        let products = assemble_positional(strings(&["A"]), vec![], strings(&["a"]));
        assert!(products.is_empty());
    }

    #[test]
    fn test_positional_skipped_price_keeps_alignment() {
        let products = assemble_positional(
            strings(&["A", "B", "C"]),
            vec![Some("1".to_string()), None, Some("3".to_string())],
            strings(&["a", "b", "c"]),
        );
        let summary: Vec<_> = products
            .iter()
            .map(|p| (p.name.as_str(), p.price.as_str(), p.code.as_str()))
            .collect();
        assert_eq!(summary, vec![("A", "1", "a"), ("C", "3", "c")]);
    }

    #[test]
    fn test_ids_are_unique() {
        let names: Vec<String> = (0..50).map(|i| format!("name {i}")).collect();
        let prices = names.iter().cloned().map(Some).collect();
        let products = assemble_positional(names.clone(), prices, names);
        let ids: HashSet<Uuid> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(products.iter().all(|p| p.id.get_version_num() == 4));
    }

    #[test]
    fn test_container_assembly() {
        let html = r#"
        <div class="card">
            <span class="ml-1">WA-001</span>
            <h6 class="title text-dots">Widget A</h6>
            <span class="price-new">Цена: = 49.50 ман</span>
        </div>
        <div class="card">
            <h6 class="title text-dots">No code</h6>
            <span class="price-new">Цена: = 5 ман</span>
        </div>
        <div class="card">
            <h6 class="title text-dots">Widget C</h6>
            <span class="price-new">Цена: = 7 ман</span>
            <span class="ml-1">WC-003</span>
        </div>
        "#;
        let document = Html::parse_document(html);
        let selectors = CompiledSelectors::compile(&SelectorConfig::default()).unwrap();
        let container = compile_selector("div.card").unwrap();

        let assembly =
            assemble_from_containers(&document, &selectors, &container, PricePolicy::FailFast)
                .unwrap();
        assert_eq!(assembly.containers, 3);
        assert_eq!(assembly.skipped, 1);
        let summary: Vec<_> = assembly
            .products
            .iter()
            .map(|p| (p.name.as_str(), p.price.as_str(), p.code.as_str()))
            .collect();
        assert_eq!(summary, vec![("Widget A", "49.50", "WA-001"), ("Widget C", "7", "WC-003")]);
    }

    #[test]
    fn test_container_price_policy() {
        let html = r#"
        <div class="card">
            <h6 class="title text-dots">Sold out</h6>
            <span class="ml-1">S-1</span>
        </div>
        <div class="card">
            <h6 class="title text-dots">Bad</h6>
            <span class="price-new">call us</span>
            <span class="ml-1">B-1</span>
        </div>
        <div class="card">
            <h6 class="title text-dots">Good</h6>
            <span class="price-new">Цена: = 3 ман</span>
            <span class="ml-1">G-1</span>
        </div>
        "#;
        let document = Html::parse_document(html);
        let selectors = CompiledSelectors::compile(&SelectorConfig::default()).unwrap();
        let container = compile_selector("div.card").unwrap();

        let err = assemble_from_containers(&document, &selectors, &container, PricePolicy::FailFast)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingPriceDelimiter { at: PriceLocation::Container(1), .. }
        ));
        assert!(err.to_string().starts_with("price in container #1 "));

        let assembly =
            assemble_from_containers(&document, &selectors, &container, PricePolicy::Skip).unwrap();
        assert_eq!(assembly.products.len(), 1);
        assert_eq!(assembly.products[0].code, "G-1");
        assert_eq!(assembly.skipped, 2);
    }
}
