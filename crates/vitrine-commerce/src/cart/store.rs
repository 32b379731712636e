//! The cart store: single owner of the in-process cart aggregate.

use crate::cart::item::CartItem;
use crate::cart::notify::{Notification, NotificationSink};
use crate::cart::storage::CartStorage;
use crate::catalog::{Product, Variant};
use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// The authoritative in-process cart.
///
/// All mutation goes through the operations here; consumers receive the
/// store by reference rather than reaching for ambient global state. Every
/// state change is written through to the storage slot before its
/// notification is dispatched, so notifications always describe the final,
/// committed quantities.
///
/// Stock handling follows the platform's semantics: `available_for_sale` is
/// the authoritative purchasability signal, while a stock count of 0 means
/// untracked inventory rather than sold out, and places no cap on quantity.
pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
    storage: Box<dyn CartStorage>,
    sink: Box<dyn NotificationSink>,
}

impl CartStore {
    /// Open the store, rehydrating from the storage slot.
    ///
    /// Corrupt or non-array persisted content is discarded and the slot is
    /// cleared; the user just sees an empty cart.
    pub fn open(mut storage: Box<dyn CartStorage>, sink: Box<dyn NotificationSink>) -> Self {
        let items = Self::rehydrate(storage.as_mut());
        Self {
            items,
            is_open: false,
            storage,
            sink,
        }
    }

    fn rehydrate(storage: &mut dyn CartStorage) -> Vec<CartItem> {
        let raw = match storage.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read persisted cart, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            // Items persisted with a non-positive quantity violate the cart
            // invariant and are dropped on the way in.
            Ok(items) => items.into_iter().filter(|item| item.quantity > 0).collect(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding corrupt persisted cart");
                if let Err(err) = storage.clear() {
                    tracing::warn!(error = %err, "could not clear corrupt cart slot");
                }
                Vec::new()
            }
        }
    }

    /// Add a quantity of a variant to the cart.
    ///
    /// Refused with a "Not Available" notification when the variant is not
    /// available for sale. Otherwise the quantity accumulates onto any
    /// existing line for the same `(product, variant)` key, capped at the
    /// variant's stock when inventory is tracked. A successful add opens the
    /// cart drawer. Non-positive quantities are treated as 1.
    pub fn add(&mut self, product: &Product, variant: &Variant, quantity: i64) {
        if !variant.available_for_sale {
            self.dispatch(Notification::destructive(
                "Not Available",
                format!(
                    "{} ({}) is currently not available for purchase.",
                    product.name, variant.name
                ),
            ));
            return;
        }

        let requested = quantity.max(1);
        let note = match self.position(&product.id, &variant.id) {
            Some(ix) => {
                let desired = self.items[ix].quantity.saturating_add(requested);
                let capped = variant.clamp_to_stock(desired);
                self.items[ix].quantity = capped;
                let name = self.items[ix].display_name();
                if capped < desired {
                    Notification::destructive(
                        "Stock Limit Reached",
                        format!(
                            "Maximum available stock for {name} reached. Total in cart: {capped}."
                        ),
                    )
                } else {
                    Notification::info(
                        "Cart Updated",
                        format!("{requested} more {name} added. Total: {capped}."),
                    )
                }
            }
            None => {
                let capped = variant.clamp_to_stock(requested);
                let name = format!("{} ({})", product.name, variant.name);
                let note = if capped < requested {
                    Notification::destructive(
                        "Stock Limit Reached",
                        format!(
                            "Only {} of {name} available. Added {capped} to cart.",
                            variant.stock
                        ),
                    )
                } else {
                    Notification::info("Added to Cart", format!("{capped} x {name} added to cart."))
                };
                self.items
                    .push(CartItem::new(product.clone(), variant.clone(), capped));
                note
            }
        };

        self.is_open = true;
        self.persist();
        self.dispatch(note);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Increases on a variant
    /// that is no longer available for sale are refused (decreases still
    /// work, so a dead line can always be drained). Tracked stock caps the
    /// new quantity. Unknown keys are a silent no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variant_id: &VariantId,
        quantity: i64,
    ) {
        let Some(ix) = self.position(product_id, variant_id) else {
            return;
        };

        let name = self.items[ix].display_name();
        let current = self.items[ix].quantity;

        if !self.items[ix].variant.available_for_sale && quantity > current {
            self.dispatch(Notification::destructive(
                "Not Available",
                format!("{name} is no longer available. Quantity not increased."),
            ));
            return;
        }

        let note;
        if quantity <= 0 {
            self.items.remove(ix);
            note = Notification::info(
                "Item Removed",
                format!("{name} removed as quantity set to 0 or less."),
            );
        } else {
            let capped = self.items[ix].variant.clamp_to_stock(quantity);
            if capped < quantity {
                note = Notification::destructive(
                    "Stock Limit",
                    format!("Max stock for {name} is {capped}. Quantity set to {capped}."),
                );
                if capped == current {
                    // Already at the cap: nothing to commit, but the user
                    // still hears why their request did not stick.
                    self.dispatch(note);
                    return;
                }
                self.items[ix].quantity = capped;
            } else if capped != current {
                self.items[ix].quantity = capped;
                note = Notification::info(
                    "Quantity Updated",
                    format!("{name} quantity set to {capped}."),
                );
            } else {
                return;
            }
        }

        self.persist();
        self.dispatch(note);
    }

    /// Remove a line from the cart. Absent keys are a silent no-op.
    pub fn remove(&mut self, product_id: &ProductId, variant_id: &VariantId) {
        let Some(ix) = self.position(product_id, variant_id) else {
            return;
        };
        let name = self.items[ix].display_name();
        self.items.remove(ix);
        self.persist();
        self.dispatch(Notification::info(
            "Item Removed",
            format!("{name} removed from cart."),
        ));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        self.dispatch(Notification::info(
            "Cart Cleared",
            "All items removed from cart.",
        ));
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count: the sum of quantities, recomputed on every call.
    pub fn count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Cart total: the sum of price times quantity, recomputed on every call.
    pub fn total(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|item| item.variant.price.currency)
            .unwrap_or_default();
        self.items
            .iter()
            .fold(Money::zero(currency), |acc, item| {
                match acc.try_add(&item.line_total()) {
                    Some(sum) => sum,
                    None => {
                        tracing::warn!(
                            product = %item.product.id,
                            "skipping line with mismatched currency in cart total"
                        );
                        acc
                    }
                }
            })
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open or close the cart drawer.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    fn position(&self, product_id: &ProductId, variant_id: &VariantId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.matches(product_id, variant_id))
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(payload) => {
                if let Err(err) = self.storage.save(&payload) {
                    tracing::error!(error = %err, "failed to persist cart");
                }
            }
            Err(err) => tracing::error!(error = %err, "failed to serialize cart"),
        }
    }

    fn dispatch(&self, notification: Notification) {
        self.sink.notify(notification);
    }
}
