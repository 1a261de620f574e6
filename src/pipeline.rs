//! One-shot run: read the page, extract products, write the JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Html;
use tracing::{debug, info};

use crate::catalog::{assemble_from_containers, assemble_positional, Product};
use crate::config::{AlignmentMode, CatalogConfig};
use crate::error::{CatalogError, Result};
use crate::extractors::{extract_fields, parse_prices, CompiledSelectors};
use crate::output::{to_json, write_output};

/// What a run found and where it went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub names_matched: usize,
    pub prices_matched: usize,
    pub codes_matched: usize,
    /// Malformed prices dropped under the skip policy, plus incomplete cards in container mode
    pub skipped: usize,
    pub output: PathBuf,
}

/// Products plus the match counts that produced them
#[derive(Debug)]
pub struct Extraction {
    pub products: Vec<Product>,
    pub names_matched: usize,
    pub prices_matched: usize,
    pub codes_matched: usize,
    pub skipped: usize,
}

/// Read a file as UTF-8, dropping any byte sequences that do not decode
pub fn load_html(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| CatalogError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut html = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        html.push_str(chunk.valid());
    }
    debug!("Loaded {} bytes from {}", bytes.len(), path.display());
    Ok(html)
}

/// Parse `html` and assemble products according to `config`
pub fn extract_products(html: &str, config: &CatalogConfig) -> Result<Extraction> {
    let selectors = CompiledSelectors::compile(&config.selectors)?;
    let document = Html::parse_document(html);

    match (config.alignment, selectors.container.as_ref()) {
        (AlignmentMode::Container, Some(container)) => {
            let fields = extract_fields(&document, &selectors);
            let assembly =
                assemble_from_containers(&document, &selectors, container, config.price_policy)?;
            info!("Found {} product containers", assembly.containers);
            Ok(Extraction {
                products: assembly.products,
                names_matched: fields.names.len(),
                prices_matched: fields.prices.len(),
                codes_matched: fields.codes.len(),
                skipped: assembly.skipped,
            })
        }
        (AlignmentMode::Container, None) => Err(CatalogError::MissingContainerSelector),
        (AlignmentMode::Positional, _) => {
            let fields = extract_fields(&document, &selectors);
            let (names_matched, prices_matched, codes_matched) =
                (fields.names.len(), fields.prices.len(), fields.codes.len());
            let prices = parse_prices(&fields.prices, config.price_policy)?;
            let skipped = prices.iter().filter(|p| p.is_none()).count();
            debug!("Parsed prices: {:?}", prices);
            Ok(Extraction {
                products: assemble_positional(fields.names, prices, fields.codes),
                names_matched,
                prices_matched,
                codes_matched,
                skipped,
            })
        }
    }
}

/// Everything up to the write: returns the rendered JSON and the summary
pub fn render(config: &CatalogConfig) -> Result<(String, RunSummary)> {
    info!("Reading {}", config.input.display());
    let html = load_html(&config.input)?;
    let extraction = extract_products(&html, config)?;
    let json = to_json(&extraction.products)?;

    let summary = RunSummary {
        records: extraction.products.len(),
        names_matched: extraction.names_matched,
        prices_matched: extraction.prices_matched,
        codes_matched: extraction.codes_matched,
        skipped: extraction.skipped,
        output: config.output.clone(),
    };
    Ok((json, summary))
}

/// Run the full pipeline and overwrite the output file
pub fn run(config: &CatalogConfig) -> Result<RunSummary> {
    let (json, summary) = render(config)?;
    write_output(&config.output, &json)?;
    info!(
        "Wrote {} products to {}",
        summary.records,
        summary.output.display()
    );
    Ok(summary)
}
