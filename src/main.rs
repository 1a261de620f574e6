use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use catalog_parser::output::write_output;
use catalog_parser::{AlignmentMode, CatalogConfig, PricePolicy};

#[derive(Parser)]
#[command(
    name = "catalog-parser",
    about = "Extract products from a saved HTML catalog page into JSON"
)]
struct Cli {
    /// HTML page to read [default: catalog.html]
    input: Option<PathBuf>,

    /// JSON file to overwrite [default: ./src/products.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; flags given here take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Selector for price elements
    #[arg(long)]
    price_selector: Option<String>,

    /// Selector for product code elements
    #[arg(long)]
    code_selector: Option<String>,

    /// Selector for product name elements
    #[arg(long)]
    name_selector: Option<String>,

    /// Read fields per product card matched by this selector instead of pairing by position
    #[arg(long)]
    container: Option<String>,

    /// Drop products whose price has no "= <amount>" instead of failing
    #[arg(long)]
    skip_malformed_prices: bool,

    /// Print the JSON to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => CatalogConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(price) = self.price_selector {
            config.selectors.price = price;
        }
        if let Some(code) = self.code_selector {
            config.selectors.code = code;
        }
        if let Some(name) = self.name_selector {
            config.selectors.name = name;
        }
        if let Some(container) = self.container {
            config.selectors.container = Some(container);
            config.alignment = AlignmentMode::Container;
        }
        if self.skip_malformed_prices {
            config.price_policy = PricePolicy::Skip;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let dry_run = cli.dry_run;
    let config = cli.into_config()?;

    let (json, summary) = catalog_parser::render(&config)
        .with_context(|| format!("extracting products from {}", config.input.display()))?;
    info!(
        "Matched {} names, {} prices, {} codes ({} skipped)",
        summary.names_matched, summary.prices_matched, summary.codes_matched, summary.skipped
    );

    if dry_run {
        println!("{}", json);
        return Ok(());
    }

    write_output(&config.output, &json)
        .with_context(|| format!("writing {}", config.output.display()))?;
    println!(
        "Saved {} products to {}",
        summary.records,
        summary.output.display()
    );
    Ok(())
}
