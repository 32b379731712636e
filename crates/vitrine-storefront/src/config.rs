//! Storefront API configuration.
//!
//! Two settings are required: the shop domain and a public Storefront access
//! token. Both are read from the environment at call time rather than cached
//! at startup, so a fixed-up `.env` is picked up on the next request and a
//! misconfiguration is reported per request. The generic placeholder values
//! that ship in example env files are treated as unset.

use crate::error::StorefrontError;
use std::env;

/// Env var naming the shop domain, e.g. `my-shop.myshopify.com`.
pub const ENV_SHOP_DOMAIN: &str = "VITRINE_SHOP_DOMAIN";
/// Env var holding the public Storefront access token.
pub const ENV_STOREFRONT_TOKEN: &str = "VITRINE_STOREFRONT_TOKEN";
/// Env var overriding the Storefront API version.
pub const ENV_API_VERSION: &str = "VITRINE_API_VERSION";
/// Storefront API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-04";

/// Placeholder values from example env files, treated as unset.
const DOMAIN_PLACEHOLDER: &str = "your-shop-name.myshopify.com";
const TOKEN_PLACEHOLDER: &str = "your_public_storefront_access_token";

/// Resolved Storefront API settings for one request.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Shop domain, e.g. `my-shop.myshopify.com`. May carry an explicit
    /// scheme, in which case it is used verbatim as the endpoint base.
    pub shop_domain: String,
    /// Public Storefront access token.
    pub access_token: String,
    /// Storefront API version segment of the endpoint path.
    pub api_version: String,
}

impl StorefrontConfig {
    /// Config from explicit values, on the default API version.
    pub fn new(shop_domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            shop_domain: shop_domain.into(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Read and validate config from the process environment.
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from the given lookup, validating that both required
    /// settings are present and not placeholders.
    ///
    /// Decoupled from `std::env` so tests can pass a plain closure instead
    /// of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StorefrontError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            shop_domain: lookup(ENV_SHOP_DOMAIN).unwrap_or_default(),
            access_token: lookup(ENV_STOREFRONT_TOKEN).unwrap_or_default(),
            api_version: lookup(ENV_API_VERSION)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check both required settings for the missing/placeholder cases.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.shop_domain.is_empty() || self.shop_domain == DOMAIN_PLACEHOLDER {
            return Err(StorefrontError::Config(format!(
                "shop domain ({ENV_SHOP_DOMAIN}) is missing or still set to the placeholder. \
                 Current value: {:?}. Set it to your real storefront domain \
                 (e.g. my-shop.myshopify.com) in .env and retry.",
                self.shop_domain
            )));
        }
        if self.access_token.is_empty() || self.access_token == TOKEN_PLACEHOLDER {
            return Err(StorefrontError::Config(format!(
                "storefront access token ({ENV_STOREFRONT_TOKEN}) is missing or still set to \
                 the placeholder. Set it to your public Storefront access token \
                 (usually starts with 'shpat_'), not an Admin API key, in .env and retry."
            )));
        }
        Ok(())
    }

    /// The GraphQL endpoint for this shop and API version.
    ///
    /// A domain with an explicit scheme is used verbatim as the base, which
    /// lets tests point the client at a local mock server.
    pub fn endpoint(&self) -> String {
        if self.shop_domain.starts_with("http://") || self.shop_domain.starts_with("https://") {
            format!("{}/api/{}/graphql.json", self.shop_domain, self.api_version)
        } else {
            format!(
                "https://{}/api/{}/graphql.json",
                self.shop_domain, self.api_version
            )
        }
    }

    /// Token reduced to a five-character prefix for logs and error text.
    pub fn redacted_token(&self) -> String {
        let prefix: String = self.access_token.chars().take(5).collect();
        format!("{prefix}...")
    }
}

/// Where a [`CatalogClient`](crate::CatalogClient) gets its config.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Resolve from the environment on every operation.
    Env,
    /// Fixed settings, validated on every operation.
    Fixed(StorefrontConfig),
}

impl ConfigSource {
    pub(crate) fn resolve(&self) -> Result<StorefrontConfig, StorefrontError> {
        match self {
            ConfigSource::Env => StorefrontConfig::from_env(),
            ConfigSource::Fixed(config) => {
                config.validate()?;
                Ok(config.clone())
            }
        }
    }
}
