use crate::models::{Product, Store};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed catalog source
///
/// The engine itself only consumes `Product` / `Store` values; this is the
/// boundary adapter a host application can use when its catalog lives in
/// JSON files instead of a remote service.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    products_path: PathBuf,
    stores_path: Option<PathBuf>,
}

impl FileCatalogSource {
    pub fn new<P: Into<PathBuf>>(products_path: P, stores_path: Option<PathBuf>) -> Self {
        Self {
            products_path: products_path.into(),
            stores_path,
        }
    }

    /// Load the full product catalog
    pub fn load_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products = load_products(&self.products_path)?;
        info!(count = products.len(), "catalog loaded");
        Ok(products)
    }

    /// Load the store list; `Ok(vec![])` when no store file is configured
    pub fn load_stores(&self) -> Result<Vec<Store>, CatalogError> {
        match &self.stores_path {
            Some(path) => {
                let stores = load_stores(path)?;
                info!(count = stores.len(), "stores loaded");
                Ok(stores)
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Parse a product catalog from a JSON file
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Parse a store list from a JSON file
pub fn load_stores<P: AsRef<Path>>(path: P) -> Result<Vec<Store>, CatalogError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
