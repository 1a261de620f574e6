//! JSON rendering and output file handling

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::catalog::Product;
use crate::error::{CatalogError, Result};

const INDENT: &[u8] = b"    ";

/// Render products as a 4-space indented JSON array.
/// Non-ASCII text is written as-is, not `\u` escaped.
pub fn to_json(products: &[Product]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    products.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| CatalogError::Serialize(serde::ser::Error::custom(e)))
}

/// Overwrite `path` with `contents`, creating missing parent directories
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let to_error = |source: io::Error| CatalogError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    fs::write(path, contents).map_err(to_error)?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
