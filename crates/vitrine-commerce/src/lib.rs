//! Domain types and cart logic for the Vitrine storefront.
//!
//! This crate holds everything that does not talk to the network:
//!
//! - **Catalog**: products, variants, images, pagination info
//! - **Cart**: the single-owner cart store with local persistence and
//!   post-commit notifications
//! - **Money**: minor-unit monetary values parsed from the platform's
//!   decimal-string amounts
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//!
//! let mut cart = CartStore::open(
//!     Box::new(JsonFileStorage::new("/tmp/vitrine")),
//!     Box::new(NullSink),
//! );
//! cart.add(&product, &variant, 1);
//! println!("{} items, {}", cart.count(), cart.total());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::{ImageId, ProductId, VariantId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ImageId, ProductId, VariantId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{PageInfo, Product, ProductImage, Variant};

    // Cart
    pub use crate::cart::{
        CartItem, CartStore, CartStorage, ChannelSink, JsonFileStorage, MemoryStorage,
        Notification, NotificationSink, NullSink, Severity,
    };
}
