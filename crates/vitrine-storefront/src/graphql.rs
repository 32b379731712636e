//! GraphQL request/response envelope and the two query documents.

use serde::{Deserialize, Serialize};

/// Paginated product listing query.
pub(crate) const PRODUCTS_QUERY: &str = r#"
query GetProducts($first: Int!, $after: String, $query: String, $sortKey: ProductSortKeys, $reverse: Boolean) {
  products(first: $first, after: $after, query: $query, sortKey: $sortKey, reverse: $reverse) {
    edges {
      cursor
      node {
        id
        title
        handle
        descriptionHtml
        tags
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        images(first: 2) {
          edges {
            node {
              id
              url
              altText
            }
          }
        }
        variants(first: 20) {
          edges {
            node {
              id
              title
              sku
              quantityAvailable
              availableForSale
              priceV2 {
                amount
                currencyCode
              }
              image {
                id
                url
                altText
              }
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
      endCursor
      hasPreviousPage
      startCursor
    }
  }
}
"#;

/// Single product by handle. Detail pages want the full image gallery, so
/// this fetches more images than the listing query does.
pub(crate) const PRODUCT_BY_HANDLE_QUERY: &str = r#"
query GetProductByHandle($handle: String!) {
  productByHandle(handle: $handle) {
    id
    title
    handle
    descriptionHtml
    tags
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    images(first: 10) {
      edges {
        node {
          id
          url
          altText
        }
      }
    }
    variants(first: 20) {
      edges {
        node {
          id
          title
          sku
          quantityAvailable
          availableForSale
          priceV2 {
            amount
            currencyCode
          }
          image {
            id
            url
            altText
          }
        }
      }
    }
  }
}
"#;

/// Outbound request body: a query document plus its variables.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Inbound response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a GraphQL errors array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GraphQlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

impl GraphQlError {
    /// Whether this error is a credential/permission rejection.
    pub(crate) fn is_unauthorized(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.code.as_deref())
            .is_some_and(|code| code.eq_ignore_ascii_case("UNAUTHORIZED"))
            || self.message.to_lowercase().contains("unauthorized")
    }
}
