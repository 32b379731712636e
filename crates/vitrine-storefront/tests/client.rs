//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local Storefront API for each test, so no
//! real network traffic is made. Covers the happy paths, the filter
//! conjunction sent upstream, and every degradation path: configuration,
//! transport, unauthorized, generic upstream errors, and malformed bodies.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_storefront::{
    Availability, CatalogClient, ConfigSource, ListProducts, StorefrontConfig, StorefrontError,
    DEFAULT_PAGE_SIZE,
};

const GRAPHQL_PATH: &str = "/api/2024-04/graphql.json";

fn client_for(server: &MockServer) -> CatalogClient {
    let config = StorefrontConfig::new(server.uri(), "shpat_test_token");
    CatalogClient::new(ConfigSource::Fixed(config)).expect("failed to build CatalogClient")
}

/// One-product listing response in the platform's connection shape.
fn products_body() -> serde_json::Value {
    json!({
        "data": {
            "products": {
                "edges": [{
                    "cursor": "cursor-1",
                    "node": product_node()
                }],
                "pageInfo": {
                    "hasNextPage": true,
                    "endCursor": "cursor-1",
                    "hasPreviousPage": false,
                    "startCursor": "cursor-1"
                }
            }
        }
    })
}

fn product_node() -> serde_json::Value {
    json!({
        "id": "gid://shopify/Product/42",
        "title": "Waxed Jacket",
        "handle": "waxed-jacket",
        "descriptionHtml": "<p>Weatherproof.</p>",
        "tags": ["apparel", "outerwear"],
        "priceRange": {"minVariantPrice": {"amount": "129.00", "currencyCode": "USD"}},
        "images": {"edges": [
            {"node": {"id": "img-42", "url": "https://cdn.example/jacket.png", "altText": "Jacket"}}
        ]},
        "variants": {"edges": [
            {"node": {
                "id": "var-42-m",
                "title": "Medium",
                "sku": "WJ-MED",
                "quantityAvailable": 7,
                "availableForSale": true,
                "priceV2": {"amount": "129.00", "currencyCode": "USD"},
                "image": {"id": "img-42", "url": "https://cdn.example/jacket.png", "altText": "Jacket"}
            }},
            {"node": {
                "id": "var-42-l",
                "title": "Large",
                "sku": null,
                "quantityAvailable": null,
                "availableForSale": false,
                "priceV2": {"amount": "129.00", "currencyCode": "USD"},
                "image": null
            }}
        ]}
    })
}

// ---------------------------------------------------------------------------
// Listing: happy path and mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_products_maps_live_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body()))
        .mount(&server)
        .await;

    let listing = client_for(&server)
        .list_products(&ListProducts::new())
        .await;

    assert!(!listing.is_fallback(), "expected live data: {:?}", listing.error);
    assert_eq!(listing.products.len(), 1);

    let product = &listing.products[0];
    assert_eq!(product.name, "Waxed Jacket");
    assert_eq!(product.slug, "waxed-jacket");
    assert_eq!(product.price.amount_minor, 12900);
    assert_eq!(product.variants.len(), 2);
    // Null quantityAvailable maps to 0 stock; availableForSale is verbatim.
    assert_eq!(product.variants[1].stock, 0);
    assert!(!product.variants[1].available_for_sale);
    assert!(product.variants[1].sku.is_none());

    assert!(listing.page_info.has_next_page);
    assert_eq!(listing.page_info.end_cursor.as_deref(), Some("cursor-1"));
}

#[tokio::test]
async fn list_products_sends_conjoined_filter_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": {"query": "(shirt) AND available_for_sale:true", "first": 6}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListProducts::new()
        .with_query("shirt")
        .with_availability(Availability::InStock)
        .with_first(6);
    let listing = client_for(&server).list_products(&request).await;

    assert!(!listing.is_fallback(), "expected live data: {:?}", listing.error);
}

#[tokio::test]
async fn list_products_sends_sort_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": {"sortKey": "PRICE", "reverse": true, "after": "cursor-1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListProducts::new()
        .with_sort(vitrine_storefront::ProductSortKey::Price)
        .reversed()
        .with_after("cursor-1");
    let listing = client_for(&server).list_products(&request).await;

    assert!(!listing.is_fallback(), "expected live data: {:?}", listing.error);
}

// ---------------------------------------------------------------------------
// Listing: degradation paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_listing_falls_back_with_remediation_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Unauthorized", "extensions": {"code": "UNAUTHORIZED"}}]
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server)
        .list_products(&ListProducts::new().with_first(1))
        .await;

    assert!(listing.is_fallback());
    assert_eq!(listing.products.len(), 1, "fallback truncated to page size");
    assert!(listing.page_info.has_next_page, "sample set exceeds page size");

    let error = listing.error.unwrap();
    assert!(matches!(error, StorefrontError::Unauthorized { .. }));
    let text = error.to_string();
    assert!(text.contains("Storefront access token"));
    assert!(text.contains("password"));
    assert!(text.contains("shpat"), "redacted token prefix: {text}");
}

#[tokio::test]
async fn generic_upstream_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Throttled", "extensions": {"code": "THROTTLED"}}]
        })))
        .mount(&server)
        .await;

    let listing = client_for(&server).list_products(&ListProducts::new()).await;

    assert!(listing.is_fallback());
    match listing.error.unwrap() {
        StorefrontError::Api { message } => assert!(message.contains("Throttled")),
        other => panic!("expected StorefrontError::Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn placeholder_config_falls_back_without_network_call() {
    let server = MockServer::start().await;
    // A mounted mock expecting zero calls proves config errors short-circuit.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = StorefrontConfig::new(
        "your-shop-name.myshopify.com",
        "your_public_storefront_access_token",
    );
    let client = CatalogClient::new(ConfigSource::Fixed(config)).unwrap();
    let listing = client.list_products(&ListProducts::new()).await;

    assert!(listing.is_fallback());
    assert_eq!(
        listing.products.len(),
        sample_len().min(DEFAULT_PAGE_SIZE as usize)
    );
    match listing.error.unwrap() {
        StorefrontError::Config(message) => {
            assert!(message.contains("VITRINE_SHOP_DOMAIN"));
        }
        other => panic!("expected StorefrontError::Config, got: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_falls_back_with_transport_error() {
    // Nothing listens here; the connection is refused immediately.
    let config = StorefrontConfig::new("http://127.0.0.1:9", "shpat_test_token");
    let client = CatalogClient::new(ConfigSource::Fixed(config)).unwrap();

    let listing = client.list_products(&ListProducts::new()).await;

    assert!(listing.is_fallback());
    match listing.error.unwrap() {
        StorefrontError::Transport { domain, .. } => {
            assert!(domain.contains("127.0.0.1"));
        }
        other => panic!("expected StorefrontError::Transport, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let listing = client_for(&server).list_products(&ListProducts::new()).await;

    assert!(listing.is_fallback());
    assert!(matches!(
        listing.error.unwrap(),
        StorefrontError::Malformed { .. }
    ));
}

// ---------------------------------------------------------------------------
// Product by handle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_by_handle_maps_node() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "variables": {"handle": "waxed-jacket"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"productByHandle": product_node()}
        })))
        .mount(&server)
        .await;

    let product = client_for(&server)
        .product_by_handle("waxed-jacket")
        .await
        .unwrap();

    assert_eq!(product.slug, "waxed-jacket");
    assert_eq!(product.variants[0].stock, 7);
}

#[tokio::test]
async fn product_by_handle_absence_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"productByHandle": null}
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).product_by_handle("missing").await;

    match result.unwrap_err() {
        StorefrontError::NotFound { handle } => assert_eq!(handle, "missing"),
        other => panic!("expected StorefrontError::NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn product_by_handle_config_error_does_not_fall_back() {
    let config = StorefrontConfig::new("", "");
    let client = CatalogClient::new(ConfigSource::Fixed(config)).unwrap();

    let result = client.product_by_handle("anything").await;

    assert!(matches!(result.unwrap_err(), StorefrontError::Config(_)));
}

fn sample_len() -> usize {
    vitrine_storefront::sample_products().len()
}
