use crate::domain::model::{CartEntry, Product};
use crate::domain::ports::{CartSource, CatalogSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog loaded from a local CSV fixture. Column names follow the wire
/// format: id,name,category,cost,rating,imageUrl.
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for CsvCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut products = Vec::new();

        for record in reader.deserialize::<Product>() {
            let product = match record {
                Ok(product) => product,
                Err(e) => {
                    tracing::warn!("Skipping malformed catalog row: {}", e);
                    continue;
                }
            };

            match product.validate() {
                Ok(()) => products.push(product),
                Err(e) => {
                    tracing::warn!("Dropping invalid catalog row '{}': {}", product.id, e);
                }
            }
        }

        Ok(products)
    }
}

/// Cart entries persisted as a JSON array. A missing file is an empty cart.
#[derive(Debug, Clone)]
pub struct JsonCartSource {
    path: PathBuf,
}

impl JsonCartSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CartSource for JsonCartSource {
    async fn fetch_entries(&self) -> Result<Vec<CartEntry>> {
        if !self.path.exists() {
            tracing::debug!("No cart file at {:?}, cart is empty", self.path);
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<CartEntry> = serde_json::from_str(&raw)?;
        Ok(entries)
    }
}
