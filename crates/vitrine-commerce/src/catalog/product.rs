//! Product, variant, and image types.

use crate::ids::{ImageId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product image.
///
/// Owned by its product; variants reference one by [`ImageId`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// Unique image identifier.
    pub id: ImageId,
    /// Source URL.
    pub src: String,
    /// Alt text for accessibility.
    pub alt: String,
}

/// A purchasable configuration of a product (e.g., "Small", "Red").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Display name (e.g., "Large / Blue").
    pub name: String,
    /// Stock keeping unit, when the platform reports one.
    pub sku: Option<String>,
    /// Price of this variant.
    pub price: Money,
    /// Platform-reported sellable units. A missing platform value maps to 0,
    /// and 0 means the platform is not tracking inventory for this variant,
    /// not that it is sold out.
    pub stock: i64,
    /// Authoritative purchasability signal, independent of `stock`.
    pub available_for_sale: bool,
    /// Optional reference to one of the owning product's images.
    pub image_id: Option<ImageId>,
}

impl Variant {
    /// Whether the platform tracks inventory for this variant.
    pub fn tracks_inventory(&self) -> bool {
        self.stock > 0
    }

    /// Clamp a requested quantity to the tracked stock level.
    ///
    /// Untracked variants (stock 0) are never clamped.
    pub fn clamp_to_stock(&self, quantity: i64) -> i64 {
        if self.tracks_inventory() {
            quantity.min(self.stock)
        } else {
            quantity
        }
    }
}

/// A catalog product, immutable once returned by the catalog client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Opaque platform identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Rich-text description (HTML).
    pub description_html: String,
    /// Base price: the minimum variant price reported by the platform.
    pub price: Money,
    /// Ordered images.
    pub images: Vec<ProductImage>,
    /// Ordered variants.
    pub variants: Vec<Variant>,
    /// URL-safe slug (the platform's handle).
    pub slug: String,
    /// Free-text tags.
    pub tags: Vec<String>,
}

impl Product {
    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Look up an image by ID.
    pub fn image(&self, id: &ImageId) -> Option<&ProductImage> {
        self.images.iter().find(|i| &i.id == id)
    }

    /// The image a variant should display: its own reference if set,
    /// otherwise the product's first image.
    pub fn image_for_variant(&self, variant: &Variant) -> Option<&ProductImage> {
        variant
            .image_id
            .as_ref()
            .and_then(|id| self.image(id))
            .or_else(|| self.images.first())
    }

    /// The first variant, used as the pre-selected default.
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Whether any variant can currently be purchased.
    pub fn is_purchasable(&self) -> bool {
        self.variants.iter().any(|v| v.available_for_sale)
    }
}
