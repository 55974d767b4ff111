use crate::core::{aggregate, assembler};
use crate::domain::model::{Assembly, CartInputs, CartSummary};
use crate::domain::ports::{CartFlow, CartSource, CatalogSource, ConfigProvider};
use crate::utils::error::Result;

/// The storefront's cart computation wired over injected collaborators:
/// a catalog source, a cart source, and the active configuration.
pub struct StorefrontPipeline<C: CatalogSource, K: CartSource, G: ConfigProvider> {
    catalog: C,
    cart: K,
    config: G,
}

impl<C: CatalogSource, K: CartSource, G: ConfigProvider> StorefrontPipeline<C, K, G> {
    pub fn new(catalog: C, cart: K, config: G) -> Self {
        Self {
            catalog,
            cart,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<C: CatalogSource, K: CartSource, G: ConfigProvider> CartFlow
    for StorefrontPipeline<C, K, G>
{
    async fn fetch(&self) -> Result<CartInputs> {
        tracing::debug!("Fetching cart entries");
        let entries = self.cart.fetch_entries().await?;

        tracing::debug!("Fetching catalog");
        let catalog = self.catalog.fetch_catalog().await?;

        Ok(CartInputs { entries, catalog })
    }

    async fn assemble(&self, inputs: CartInputs) -> Result<Assembly> {
        let assembly = assembler::assemble_with_policy(
            &inputs.entries,
            &inputs.catalog,
            self.config.quantity_policy(),
        );

        if !assembly.warnings.is_empty() {
            tracing::debug!(
                "Assembly produced {} warning(s) for {} entries",
                assembly.warnings.len(),
                inputs.entries.len()
            );
        }

        Ok(assembly)
    }

    async fn summarize(&self, assembly: Assembly) -> Result<CartSummary> {
        let total_value = aggregate::total_value(&assembly.items);
        let total_count = aggregate::total_count(&assembly.items);

        Ok(CartSummary {
            items: assembly.items,
            total_value,
            total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CartEntry, Product, QuantityPolicy};

    struct StaticCatalog {
        products: Vec<Product>,
    }

    impl CatalogSource for StaticCatalog {
        async fn fetch_catalog(&self) -> Result<Vec<Product>> {
            Ok(self.products.clone())
        }
    }

    struct StaticCart {
        entries: Vec<CartEntry>,
    }

    impl CartSource for StaticCart {
        async fn fetch_entries(&self) -> Result<Vec<CartEntry>> {
            Ok(self.entries.clone())
        }
    }

    struct TestConfig {
        policy: QuantityPolicy,
    }

    impl ConfigProvider for TestConfig {
        fn quantity_policy(&self) -> QuantityPolicy {
            self.policy
        }

        fn notifications_enabled(&self) -> bool {
            false
        }
    }

    fn product(id: &str, cost: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: "misc".to_string(),
            cost,
            rating: 5,
            image_url: format!("https://cdn.example.com/{id}.png"),
        }
    }

    fn pipeline(
        products: Vec<Product>,
        entries: Vec<CartEntry>,
        policy: QuantityPolicy,
    ) -> StorefrontPipeline<StaticCatalog, StaticCart, TestConfig> {
        StorefrontPipeline::new(
            StaticCatalog { products },
            StaticCart { entries },
            TestConfig { policy },
        )
    }

    #[tokio::test]
    async fn test_fetch_gathers_entries_and_catalog() {
        let p = pipeline(
            vec![product("A", 10.0)],
            vec![CartEntry {
                product_id: "A".to_string(),
                quantity: 2,
            }],
            QuantityPolicy::Allow,
        );

        let inputs = p.fetch().await.unwrap();

        assert_eq!(inputs.entries.len(), 1);
        assert_eq!(inputs.catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_assemble_applies_configured_policy() {
        let p = pipeline(
            vec![product("A", 10.0)],
            vec![],
            QuantityPolicy::Reject,
        );

        let inputs = CartInputs {
            entries: vec![
                CartEntry {
                    product_id: "A".to_string(),
                    quantity: 0,
                },
                CartEntry {
                    product_id: "A".to_string(),
                    quantity: 3,
                },
            ],
            catalog: vec![product("A", 10.0)],
        };

        let assembly = p.assemble(inputs).await.unwrap();

        assert_eq!(assembly.items.len(), 1);
        assert_eq!(assembly.items[0].quantity, 3);
        assert_eq!(assembly.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_derives_both_aggregates() {
        let p = pipeline(vec![], vec![], QuantityPolicy::Allow);

        let assembly = Assembly {
            items: vec![line("A", 5.0, 3), line("B", 2.0, 1)],
            warnings: vec![],
        };

        let summary = p.summarize(assembly).await.unwrap();

        assert_eq!(summary.total_value, 17.0);
        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.items.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_cart_summarizes_to_zero() {
        let p = pipeline(vec![product("A", 10.0)], vec![], QuantityPolicy::Allow);

        let inputs = p.fetch().await.unwrap();
        let assembly = p.assemble(inputs).await.unwrap();
        let summary = p.summarize(assembly).await.unwrap();

        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.total_count, 0);
        assert!(summary.items.is_empty());
    }

    fn line(id: &str, cost: f64, quantity: i64) -> crate::domain::model::CartLineItem {
        crate::domain::model::CartLineItem {
            product_id: id.to_string(),
            name: format!("Product {id}"),
            category: "misc".to_string(),
            cost,
            rating: 5,
            image_url: format!("https://cdn.example.com/{id}.png"),
            quantity,
        }
    }
}
