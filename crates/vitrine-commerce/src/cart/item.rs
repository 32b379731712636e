//! Cart line items.

use crate::catalog::{Product, Variant};
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product snapshot plus one chosen variant and a positive quantity.
///
/// Two items never share a `(product, variant)` key; an item whose quantity
/// would drop to zero is removed from the cart instead of being stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// The chosen variant.
    pub variant: Variant,
    /// Quantity, always > 0 while the item is in the cart.
    pub quantity: i64,
}

impl CartItem {
    /// Create a new line item.
    pub fn new(product: Product, variant: Variant, quantity: i64) -> Self {
        Self {
            product,
            variant,
            quantity,
        }
    }

    /// Whether this item is keyed by the given product/variant pair.
    pub fn matches(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        &self.product.id == product_id && &self.variant.id == variant_id
    }

    /// Line total: variant price times quantity.
    pub fn line_total(&self) -> Money {
        self.variant.price.times(self.quantity)
    }

    /// Display name, e.g. "Classic Tee (Small)".
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.product.name, self.variant.name)
    }
}
