use crate::domain::model::{
    Assembly, AssemblyWarning, CartEntry, CartLineItem, Product, QuantityPolicy,
};

/// Joins sparse cart entries against the catalog, preserving entry order.
/// Entries whose product id has no catalog match are dropped with a warning,
/// never an error. Quantities pass through untouched.
pub fn assemble(entries: &[CartEntry], catalog: &[Product]) -> Assembly {
    assemble_with_policy(entries, catalog, QuantityPolicy::Allow)
}

pub fn assemble_with_policy(
    entries: &[CartEntry],
    catalog: &[Product],
    policy: QuantityPolicy,
) -> Assembly {
    // An empty catalog means "nothing to show", not an error. Skip the
    // per-entry diagnostics entirely in that case.
    if catalog.is_empty() {
        if !entries.is_empty() {
            tracing::debug!("Catalog is empty, nothing to assemble");
        }
        return Assembly::default();
    }

    let mut assembly = Assembly::default();

    for entry in entries {
        // Linear scan; carts hold a few dozen entries at most.
        let Some(product) = catalog.iter().find(|p| p.id == entry.product_id) else {
            tracing::warn!(
                "Cart entry references unknown product id: {}",
                entry.product_id
            );
            assembly.warnings.push(AssemblyWarning::MissingProduct {
                product_id: entry.product_id.clone(),
            });
            continue;
        };

        let quantity = match policy {
            QuantityPolicy::Allow => entry.quantity,
            QuantityPolicy::Clamp => {
                if entry.quantity < 0 {
                    tracing::warn!(
                        "Clamping negative quantity {} for product {}",
                        entry.quantity,
                        entry.product_id
                    );
                    assembly.warnings.push(AssemblyWarning::ClampedQuantity {
                        product_id: entry.product_id.clone(),
                        quantity: entry.quantity,
                    });
                    0
                } else {
                    entry.quantity
                }
            }
            QuantityPolicy::Reject => {
                if entry.quantity <= 0 {
                    tracing::warn!(
                        "Rejecting non-positive quantity {} for product {}",
                        entry.quantity,
                        entry.product_id
                    );
                    assembly.warnings.push(AssemblyWarning::RejectedQuantity {
                        product_id: entry.product_id.clone(),
                        quantity: entry.quantity,
                    });
                    continue;
                }
                entry.quantity
            }
        };

        assembly.items.push(merge(product, quantity));
    }

    assembly
}

fn merge(product: &Product, quantity: i64) -> CartLineItem {
    CartLineItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        category: product.category.clone(),
        cost: product.cost,
        rating: product.rating,
        image_url: product.image_url.clone(),
        quantity,
    }
}
