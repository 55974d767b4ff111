use crate::domain::model::{
    Assembly, CartEntry, CartInputs, CartSummary, Product, QuantityPolicy, Severity,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the full product catalog. Owned by an external collaborator
/// (remote service or local fixture file).
pub trait CatalogSource: Send + Sync {
    fn fetch_catalog(&self) -> impl std::future::Future<Output = Result<Vec<Product>>> + Send;
}

/// Supplies the visitor's current cart entries.
pub trait CartSource: Send + Sync {
    fn fetch_entries(&self) -> impl std::future::Future<Output = Result<Vec<CartEntry>>> + Send;
}

/// Performs the actual cart mutation on increment/decrement. The caller
/// passes its current session token; the collaborator decides what a
/// non-positive quantity means.
pub trait QuantityUpdater: Send + Sync {
    fn update_quantity(
        &self,
        token: &str,
        product_id: &str,
        new_quantity: i64,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Keys the session store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Token,
    Username,
}

/// Externally-owned session state (token, username).
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Option<String>;
    fn clear(&self);
}

/// Route transitions are the host's concern; the shells only name paths.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Notification sink for user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

pub trait ConfigProvider: Send + Sync {
    fn quantity_policy(&self) -> QuantityPolicy;
    fn notifications_enabled(&self) -> bool;
}

/// The staged cart computation: gather inputs, join against the catalog,
/// derive aggregates.
#[async_trait]
pub trait CartFlow: Send + Sync {
    async fn fetch(&self) -> Result<CartInputs>;
    async fn assemble(&self, inputs: CartInputs) -> Result<Assembly>;
    async fn summarize(&self, assembly: Assembly) -> Result<CartSummary>;
}
