//! Catalog client for the commerce platform's Storefront GraphQL API.
//!
//! Translates listing and detail requests into the platform's GraphQL
//! queries, executes them, and normalizes the response into
//! [`vitrine_commerce`] domain types. Stateless: every operation resolves
//! its configuration fresh, runs one request, and maps the result.
//!
//! Failure never crosses this crate as a panic or a bare transport error.
//! Listings degrade to a bundled sample catalog alongside a descriptive
//! error; product-by-handle lookups report absence as [`StorefrontError::NotFound`].

mod client;
mod config;
mod error;
mod graphql;
mod map;
mod sample;
mod types;

pub use client::{
    Availability, CatalogClient, ListProducts, ProductListing, ProductSortKey, DEFAULT_PAGE_SIZE,
};
pub use config::{
    ConfigSource, StorefrontConfig, DEFAULT_API_VERSION, ENV_API_VERSION, ENV_SHOP_DOMAIN,
    ENV_STOREFRONT_TOKEN,
};
pub use error::StorefrontError;
pub use sample::sample_products;
