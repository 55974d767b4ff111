use crate::core::CartFlow;
use crate::domain::model::CartSummary;
use crate::utils::error::Result;

pub struct CartEngine<P: CartFlow> {
    flow: P,
}

impl<P: CartFlow> CartEngine<P> {
    pub fn new(flow: P) -> Self {
        Self { flow }
    }

    pub async fn run(&self) -> Result<CartSummary> {
        tracing::info!("Starting cart computation");

        let inputs = self.flow.fetch().await?;
        tracing::info!(
            "Fetched {} cart entries against {} catalog products",
            inputs.entries.len(),
            inputs.catalog.len()
        );

        let assembly = self.flow.assemble(inputs).await?;
        tracing::info!(
            "Assembled {} line items ({} warnings)",
            assembly.items.len(),
            assembly.warnings.len()
        );

        let summary = self.flow.summarize(assembly).await?;
        tracing::info!(
            "Cart total: {:.2} across {} items",
            summary.total_value,
            summary.total_count
        );

        Ok(summary)
    }
}
