//! The catalog client: listing and by-handle lookups against the
//! Storefront GraphQL API.

use crate::config::{ConfigSource, StorefrontConfig};
use crate::error::StorefrontError;
use crate::graphql::{GraphQlRequest, GraphQlResponse, PRODUCTS_QUERY, PRODUCT_BY_HANDLE_QUERY};
use crate::map::map_product;
use crate::sample::sample_products;
use crate::types::{ProductByHandleData, ProductsData};
use serde::de::DeserializeOwned;
use serde_json::json;
use vitrine_commerce::catalog::{PageInfo, Product};

/// Page size used when a listing request does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Availability filter for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    /// No availability predicate.
    #[default]
    All,
    /// Only variants available for sale.
    InStock,
    /// Only variants not available for sale.
    OutOfStock,
}

impl Availability {
    fn predicate(self) -> Option<&'static str> {
        match self {
            Availability::All => None,
            Availability::InStock => Some("available_for_sale:true"),
            Availability::OutOfStock => Some("available_for_sale:false"),
        }
    }
}

/// Sort keys accepted by the platform's product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    Title,
    Price,
    CreatedAt,
    UpdatedAt,
    BestSelling,
    Relevance,
    Id,
}

impl ProductSortKey {
    /// The platform's enum spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductSortKey::Title => "TITLE",
            ProductSortKey::Price => "PRICE",
            ProductSortKey::CreatedAt => "CREATED_AT",
            ProductSortKey::UpdatedAt => "UPDATED_AT",
            ProductSortKey::BestSelling => "BEST_SELLING",
            ProductSortKey::Relevance => "RELEVANCE",
            ProductSortKey::Id => "ID",
        }
    }
}

/// Parameters of a product listing request.
#[derive(Debug, Clone, Default)]
pub struct ListProducts {
    /// Page size; [`DEFAULT_PAGE_SIZE`] when unset.
    pub first: Option<u32>,
    /// Forward cursor from a previous page's `end_cursor`.
    pub after: Option<String>,
    /// Free-text search query.
    pub query: Option<String>,
    /// Sort key; the platform default when unset.
    pub sort_key: Option<ProductSortKey>,
    /// Reverse the sort order.
    pub reverse: bool,
    /// Availability filter, conjoined with the free-text query.
    pub availability: Availability,
}

impl ListProducts {
    /// A request for the first page on defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_first(mut self, first: u32) -> Self {
        self.first = Some(first);
        self
    }

    /// Set the forward cursor.
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.query = Some(query);
        }
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort_key: ProductSortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    /// Reverse the sort order.
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Set the availability filter.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    fn page_size(&self) -> u32 {
        self.first.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// The search string sent upstream: the availability predicate conjoined
    /// with any free-text query, the free-text part parenthesized first.
    fn search_query(&self) -> Option<String> {
        match (self.query.as_deref(), self.availability.predicate()) {
            (Some(text), Some(predicate)) => Some(format!("({text}) AND {predicate}")),
            (Some(text), None) => Some(text.to_string()),
            (None, Some(predicate)) => Some(predicate.to_string()),
            (None, None) => None,
        }
    }
}

/// A product listing result.
///
/// Listings never fail outright: on any error the products are the bundled
/// sample catalog truncated to the requested page size, and `error` carries
/// the reason. Callers render the error inline and the fallback beneath it.
#[derive(Debug)]
pub struct ProductListing {
    /// The products, live or fallback.
    pub products: Vec<Product>,
    /// Pagination state for the listing.
    pub page_info: PageInfo,
    /// Why the listing degraded to the sample catalog, when it did.
    pub error: Option<StorefrontError>,
}

impl ProductListing {
    /// Whether this listing is the sample fallback rather than live data.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Client for the Storefront GraphQL API.
///
/// Stateless between calls; configuration is resolved fresh on every
/// operation so a fixed-up environment takes effect without a restart.
/// Requests carry no timeout and are never retried: the caller owns request
/// sequencing and any loading states.
pub struct CatalogClient {
    http: reqwest::Client,
    source: ConfigSource,
}

impl CatalogClient {
    /// Client over the given config source.
    pub fn new(source: ConfigSource) -> Result<Self, StorefrontError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, source })
    }

    /// Client reading its config from the environment per request.
    pub fn from_env() -> Result<Self, StorefrontError> {
        Self::new(ConfigSource::Env)
    }

    /// List products.
    ///
    /// Every failure (configuration, transport, or upstream) degrades to
    /// the sample catalog truncated to the page size, with the error
    /// attached. `has_next_page` on the fallback reflects whether the sample
    /// set exceeds the page size.
    pub async fn list_products(&self, request: &ListProducts) -> ProductListing {
        match self.list_products_inner(request).await {
            Ok((products, page_info)) => ProductListing {
                products,
                page_info,
                error: None,
            },
            Err(error) => {
                tracing::warn!(error = %error, "product listing failed, serving sample catalog");
                fallback_listing(request.page_size(), error)
            }
        }
    }

    async fn list_products_inner(
        &self,
        request: &ListProducts,
    ) -> Result<(Vec<Product>, PageInfo), StorefrontError> {
        let config = self.source.resolve()?;
        let search_query = request.search_query();
        tracing::debug!(query = ?search_query, first = request.page_size(), "listing products");

        let variables = json!({
            "first": request.page_size(),
            "after": request.after.clone(),
            "query": search_query,
            "sortKey": request.sort_key.map(ProductSortKey::as_str),
            "reverse": request.reverse,
        });
        let data: ProductsData = self.execute(&config, PRODUCTS_QUERY, variables).await?;

        let products = data
            .products
            .edges
            .into_iter()
            .map(|edge| map_product(edge.node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((products, data.products.page_info))
    }

    /// Fetch a single product by its handle.
    ///
    /// Absence is [`StorefrontError::NotFound`]: meaningful, and never
    /// papered over with sample data.
    pub async fn product_by_handle(&self, handle: &str) -> Result<Product, StorefrontError> {
        let config = self.source.resolve()?;
        tracing::debug!(handle, "fetching product by handle");

        let data: ProductByHandleData = self
            .execute(&config, PRODUCT_BY_HANDLE_QUERY, json!({ "handle": handle }))
            .await?;

        match data.product_by_handle {
            Some(node) => map_product(node),
            None => Err(StorefrontError::NotFound {
                handle: handle.to_string(),
            }),
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        config: &StorefrontConfig,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, StorefrontError> {
        let response = self
            .http
            .post(config.endpoint())
            .header(ACCESS_TOKEN_HEADER, &config.access_token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|err| StorefrontError::Transport {
                domain: config.shop_domain.clone(),
                message: err.to_string(),
            })?;

        let body: GraphQlResponse<T> =
            response
                .json()
                .await
                .map_err(|err| StorefrontError::Malformed {
                    context: err.to_string(),
                })?;

        if !body.errors.is_empty() {
            if body.errors.iter().any(|err| err.is_unauthorized()) {
                return Err(StorefrontError::Unauthorized {
                    token_prefix: config.redacted_token(),
                });
            }
            let message = body
                .errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StorefrontError::Api { message });
        }

        body.data.ok_or_else(|| StorefrontError::Malformed {
            context: "response carried neither data nor errors".to_string(),
        })
    }
}

fn fallback_listing(page_size: u32, error: StorefrontError) -> ProductListing {
    let sample = sample_products();
    let has_next_page = sample.len() > page_size as usize;
    ProductListing {
        products: sample.into_iter().take(page_size as usize).collect(),
        page_info: PageInfo::forward(has_next_page),
        error: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_conjoins_text_and_availability() {
        let request = ListProducts::new()
            .with_query("shirt")
            .with_availability(Availability::InStock);
        assert_eq!(
            request.search_query().as_deref(),
            Some("(shirt) AND available_for_sale:true")
        );
    }

    #[test]
    fn test_search_query_availability_alone() {
        let request = ListProducts::new().with_availability(Availability::OutOfStock);
        assert_eq!(
            request.search_query().as_deref(),
            Some("available_for_sale:false")
        );
    }

    #[test]
    fn test_search_query_text_alone() {
        let request = ListProducts::new().with_query("shirt");
        assert_eq!(request.search_query().as_deref(), Some("shirt"));
    }

    #[test]
    fn test_search_query_empty() {
        assert_eq!(ListProducts::new().search_query(), None);
        // An empty text query is not a query.
        assert_eq!(ListProducts::new().with_query("").search_query(), None);
    }

    #[test]
    fn test_sort_key_spelling() {
        assert_eq!(ProductSortKey::BestSelling.as_str(), "BEST_SELLING");
        assert_eq!(ProductSortKey::CreatedAt.as_str(), "CREATED_AT");
    }

    #[test]
    fn test_fallback_truncates_and_flags_next_page() {
        let listing = fallback_listing(
            1,
            StorefrontError::Api {
                message: "boom".to_string(),
            },
        );
        assert!(listing.is_fallback());
        assert_eq!(listing.products.len(), 1);
        assert!(listing.page_info.has_next_page);

        let all = fallback_listing(
            50,
            StorefrontError::Api {
                message: "boom".to_string(),
            },
        );
        assert!(!all.page_info.has_next_page);
        assert_eq!(all.products.len(), sample_products().len());
    }
}
