use serde::{Deserialize, Serialize};

/// Catalog product as delivered by the backing store. Field names stay
/// camelCase on the wire to match the storefront backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: u8,
    pub image_url: String,
}

impl crate::utils::validation::Validate for Product {
    /// Boundary check applied by catalog adapters; rows that fail are
    /// dropped with a diagnostic, never surfaced as a fatal error.
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation;

        validation::validate_identifier("id", &self.id)?;
        validation::validate_non_empty_string("name", &self.name)?;
        validation::validate_non_negative("cost", self.cost)?;
        validation::validate_range("rating", self.rating, 0, 5)?;
        validation::validate_url("imageUrl", &self.image_url)?;
        Ok(())
    }
}

/// Sparse cart reference: which product, how many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: i64,
}

/// A cart entry enriched with full catalog data, ready for display and
/// total computation. Recomputed on every assembly, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: u8,
    pub image_url: String,
    pub quantity: i64,
}

/// Non-fatal degradations observed while assembling line items.
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyWarning {
    MissingProduct { product_id: String },
    RejectedQuantity { product_id: String, quantity: i64 },
    ClampedQuantity { product_id: String, quantity: i64 },
}

/// Assembler output: the surviving line items plus everything that was
/// dropped or adjusted on the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assembly {
    pub items: Vec<CartLineItem>,
    pub warnings: Vec<AssemblyWarning>,
}

/// How the assembler treats zero/negative quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    /// Pass quantities through untouched.
    #[default]
    Allow,
    /// Raise negative quantities to zero, keep the line.
    Clamp,
    /// Drop lines whose quantity is zero or negative.
    Reject,
}

/// Inputs gathered for one cart computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartInputs {
    pub entries: Vec<CartEntry>,
    pub catalog: Vec<Product>,
}

/// Fully derived cart: line items plus both aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub total_value: f64,
    pub total_count: i64,
}

/// What the header renders for the current visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderState {
    Anonymous,
    Authenticated { username: String },
}

/// Notification severity, mirroring the host's snackbar variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}
