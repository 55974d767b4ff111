use crate::domain::model::CartLineItem;

/// Render model for the per-line quantity control. Holds no state of its
/// own and performs no validation; wiring the increment/decrement actions
/// to the quantity updater is the cart view's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemQuantity {
    pub quantity: i64,
    pub editable: bool,
}

impl ItemQuantity {
    pub fn read_only(quantity: i64) -> Self {
        Self {
            quantity,
            editable: false,
        }
    }

    pub fn editable(quantity: i64) -> Self {
        Self {
            quantity,
            editable: true,
        }
    }

    pub fn for_line(line: &CartLineItem, editable: bool) -> Self {
        Self {
            quantity: line.quantity,
            editable,
        }
    }

    /// Static text in read-only mode, the `-`/`+` affordance otherwise.
    pub fn label(&self) -> String {
        if self.editable {
            format!("- {} +", self.quantity)
        } else {
            self.quantity.to_string()
        }
    }
}
