use crate::domain::model::CartLineItem;

/// Sum of `cost * quantity` over all line items. Negative quantities and
/// non-finite costs propagate arithmetically; there is deliberately no guard.
pub fn total_value(items: &[CartLineItem]) -> f64 {
    items
        .iter()
        .map(|item| item.cost * item.quantity as f64)
        .sum()
}

/// Sum of quantities over all line items. Short-circuits before any
/// reduction when the sequence is empty.
pub fn total_count(items: &[CartLineItem]) -> i64 {
    if items.is_empty() {
        return 0;
    }
    items.iter().map(|item| item.quantity).sum()
}
