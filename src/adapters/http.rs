use crate::domain::model::{CartEntry, Product};
use crate::domain::ports::{CartSource, CatalogSource, QuantityUpdater};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use reqwest::Client;

/// Catalog served by the storefront backend as a JSON array of products.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        tracing::debug!("Requesting catalog from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        if !response.status().is_success() {
            // An unavailable catalog renders as an empty storefront, not a
            // crash. The cart assembler treats it the same way.
            tracing::warn!(
                "Catalog endpoint returned {}, showing empty catalog",
                response.status()
            );
            return Ok(Vec::new());
        }

        let products: Vec<Product> = response.json().await?;
        Ok(keep_valid(products))
    }
}

fn keep_valid(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| match product.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Dropping invalid catalog row '{}': {}", product.id, e);
                false
            }
        })
        .collect()
}

/// Remote cart collaborator: reads the visitor's entries and performs the
/// quantity mutations the cart view requests.
#[derive(Debug, Clone)]
pub struct HttpCartClient {
    client: Client,
    base_url: String,
}

impl HttpCartClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl CartSource for HttpCartClient {
    async fn fetch_entries(&self) -> Result<Vec<CartEntry>> {
        let url = format!("{}/cart", self.base_url);
        tracing::debug!("Requesting cart entries from: {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Cart endpoint returned {}, treating cart as empty",
                response.status()
            );
            return Ok(Vec::new());
        }

        let entries: Vec<CartEntry> = response.json().await?;
        Ok(entries)
    }
}

impl QuantityUpdater for HttpCartClient {
    async fn update_quantity(
        &self,
        token: &str,
        product_id: &str,
        new_quantity: i64,
    ) -> Result<()> {
        let url = format!("{}/cart/{}", self.base_url, product_id);
        tracing::debug!("Updating quantity at {} to {}", url, new_quantity);

        self.client
            .put(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "quantity": new_quantity }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
