// SPDX-License-Identifier: MPL-2.0
//! Content loader: reads product records and validates them against the
//! catalog schema before anything else sees them.
//!
//! A source is either
//! - a JSON file holding one record or an array of records, or
//! - a directory of `*.json` files (one collection entry per file), read in
//!   file-name order.
//!
//! With no source configured, the catalog bundled with the binary is used.

use super::{Catalog, Product};
use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct BundledCatalog;

/// Loads and validates the catalog at `path`.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let products = if path.is_dir() {
        load_directory(path)?
    } else {
        let content = fs::read_to_string(path)?;
        parse_records(&content, &source_name(path))?
    };
    if products.is_empty() {
        return Err(CatalogError::EmptySource(path.display().to_string()).into());
    }
    tracing::info!(
        source = %path.display(),
        products = products.len(),
        "catalog loaded"
    );
    Ok(Catalog::new(products))
}

/// Loads the catalog bundled with the binary.
pub fn load_bundled() -> Result<Catalog> {
    let mut files: Vec<String> = BundledCatalog::iter()
        .map(|name| name.into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    files.sort();

    let mut products = Vec::new();
    for name in &files {
        if let Some(file) = BundledCatalog::get(name) {
            let content = String::from_utf8_lossy(file.data.as_ref());
            products.extend(parse_records(&content, name)?);
        }
    }
    if products.is_empty() {
        return Err(CatalogError::EmptySource("bundled catalog".to_string()).into());
    }
    tracing::info!(products = products.len(), "bundled catalog loaded");
    Ok(Catalog::new(products))
}

fn load_directory(dir: &Path) -> Result<Vec<Product>> {
    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(CatalogError::EmptySource(dir.display().to_string()).into());
    }

    let mut products = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file)?;
        products.extend(parse_records(&content, &source_name(file))?);
    }
    Ok(products)
}

/// Parses and validates the records contained in one JSON document.
///
/// A document holds a single record or an array of them. Records are
/// decoded one at a time so a failure names the offending record.
pub fn parse_records(content: &str, source_name: &str) -> Result<Vec<Product>> {
    let parse_error = |message: String| CatalogError::Parse {
        source_name: source_name.to_string(),
        message,
    };

    let document: Value =
        serde_json::from_str(content).map_err(|err| parse_error(err.to_string()))?;
    let records = match document {
        Value::Array(records) => records,
        record @ Value::Object(_) => vec![record],
        _ => {
            let message = "expected a product record or an array of records".to_string();
            return Err(parse_error(message).into());
        }
    };

    let mut products = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let product: Product = serde_json::from_value(record)
            .map_err(|err| parse_error(format!("product #{index}: {err}")))?;
        validate(&product, index, source_name)?;
        products.push(product);
    }
    Ok(products)
}

fn validate(product: &Product, index: usize, source_name: &str) -> Result<()> {
    let missing = |field| CatalogError::MissingField {
        source_name: source_name.to_string(),
        index,
        field,
    };

    if product.title.trim().is_empty() {
        return Err(missing("title").into());
    }
    if product.slug.trim().is_empty() {
        return Err(missing("slug").into());
    }
    if product.category.trim().is_empty() {
        return Err(missing("category").into());
    }
    if product.image.iter().any(|image| image.src.trim().is_empty()) {
        return Err(missing("image.src").into());
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::InvalidPrice {
            source_name: source_name.to_string(),
            slug: product.slug.clone(),
        }
        .into());
    }
    Ok(())
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
