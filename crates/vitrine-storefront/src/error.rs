//! Catalog client error types.
//!
//! Every variant carries actionable display text; none of them escapes the
//! client as a panic. Listing operations attach the error to a fallback
//! result instead of failing outright.

use thiserror::Error;

/// Errors from the Storefront API client.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Missing or placeholder settings, detected before any network call.
    #[error("storefront configuration error: {0}")]
    Config(String),

    /// Could not construct the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform could not be reached (DNS, connect, TLS).
    #[error(
        "could not reach the storefront API at {domain:?}: {message}. Check that \
         VITRINE_SHOP_DOMAIN names your real storefront domain and that you are online."
    )]
    Transport { domain: String, message: String },

    /// The platform rejected the request as unauthorized.
    #[error(
        "storefront API rejected the request as unauthorized. Check: (1) the token in \
         VITRINE_STOREFRONT_TOKEN is a public Storefront access token (usually starts with \
         'shpat_'), not an Admin API key; (2) the token has the \
         unauthenticated_read_product_listings scope; (3) the store is not password \
         protected. Token used (first 5 chars): {token_prefix}"
    )]
    Unauthorized { token_prefix: String },

    /// The platform returned a GraphQL errors payload.
    #[error("storefront API returned an error: {message}")]
    Api { message: String },

    /// A 2xx response that did not carry the expected data.
    #[error("malformed storefront API response: {context}")]
    Malformed { context: String },

    /// No product resolves to the requested handle. Meaningful absence, not
    /// a platform fault; by-handle lookups never fall back to sample data.
    #[error("product with handle {handle:?} not found")]
    NotFound { handle: String },
}
