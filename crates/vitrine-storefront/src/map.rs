//! Normalization of wire product nodes into domain types.

use crate::error::StorefrontError;
use crate::types::{MoneyV2, ProductNode};
use vitrine_commerce::catalog::{Product, ProductImage, Variant};
use vitrine_commerce::{Currency, ImageId, Money, ProductId, VariantId};

/// Map a platform product node into a domain [`Product`].
///
/// - base price is the platform-reported minimum variant price
/// - a variant's missing `quantityAvailable` maps to stock 0 (untracked);
///   `availableForSale` is copied verbatim and stays the authoritative
///   purchasability signal
/// - image alt text falls back to the product title
pub(crate) fn map_product(node: ProductNode) -> Result<Product, StorefrontError> {
    let price = parse_money(&node.price_range.min_variant_price)?;

    let images: Vec<ProductImage> = node
        .images
        .edges
        .into_iter()
        .map(|edge| ProductImage {
            id: ImageId::new(edge.node.id),
            src: edge.node.url,
            alt: edge.node.alt_text.unwrap_or_else(|| node.title.clone()),
        })
        .collect();

    let variants = node
        .variants
        .edges
        .into_iter()
        .map(|edge| {
            let v = edge.node;
            Ok(Variant {
                id: VariantId::new(v.id),
                name: v.title,
                sku: v.sku.filter(|sku| !sku.is_empty()),
                price: parse_money(&v.price_v2)?,
                stock: v.quantity_available.unwrap_or(0),
                available_for_sale: v.available_for_sale,
                image_id: v.image.map(|image| ImageId::new(image.id)),
            })
        })
        .collect::<Result<Vec<_>, StorefrontError>>()?;

    Ok(Product {
        id: ProductId::new(node.id),
        name: node.title,
        description_html: node.description_html.unwrap_or_default(),
        price,
        images,
        variants,
        slug: node.handle,
        tags: node.tags,
    })
}

fn parse_money(money: &MoneyV2) -> Result<Money, StorefrontError> {
    let currency = money
        .currency_code
        .as_deref()
        .and_then(Currency::from_code)
        .unwrap_or_default();
    Money::parse(&money.amount, currency).map_err(|err| StorefrontError::Malformed {
        context: format!("unparseable amount {:?}: {err}", money.amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: serde_json::Value) -> ProductNode {
        serde_json::from_value(json).unwrap()
    }

    fn tee_node() -> ProductNode {
        node(serde_json::json!({
            "id": "gid://shopify/Product/1",
            "title": "Classic Tee",
            "handle": "classic-tee",
            "descriptionHtml": "<p>Soft cotton.</p>",
            "tags": ["apparel"],
            "priceRange": {"minVariantPrice": {"amount": "29.99", "currencyCode": "USD"}},
            "images": {"edges": [
                {"node": {"id": "img-1", "url": "https://cdn.example/front.png", "altText": null}}
            ]},
            "variants": {"edges": [
                {"node": {
                    "id": "var-1",
                    "title": "Small",
                    "sku": "CT-SML",
                    "quantityAvailable": null,
                    "availableForSale": true,
                    "priceV2": {"amount": "29.99", "currencyCode": "USD"},
                    "image": {"id": "img-1", "url": "https://cdn.example/front.png", "altText": "Front"}
                }}
            ]}
        }))
    }

    #[test]
    fn test_maps_core_fields() {
        let product = map_product(tee_node()).unwrap();
        assert_eq!(product.id.as_str(), "gid://shopify/Product/1");
        assert_eq!(product.name, "Classic Tee");
        assert_eq!(product.slug, "classic-tee");
        assert_eq!(product.price, Money::new(2999, Currency::USD));
        assert_eq!(product.tags, vec!["apparel"]);
    }

    #[test]
    fn test_null_quantity_available_maps_to_zero_stock() {
        let product = map_product(tee_node()).unwrap();
        let variant = &product.variants[0];
        assert_eq!(variant.stock, 0);
        // availableForSale stays authoritative even with no tracked stock.
        assert!(variant.available_for_sale);
    }

    #[test]
    fn test_missing_alt_text_falls_back_to_title() {
        let product = map_product(tee_node()).unwrap();
        assert_eq!(product.images[0].alt, "Classic Tee");
    }

    #[test]
    fn test_variant_image_reference() {
        let product = map_product(tee_node()).unwrap();
        assert_eq!(
            product.variants[0].image_id.as_ref().unwrap().as_str(),
            "img-1"
        );
    }

    #[test]
    fn test_empty_sku_maps_to_none() {
        let mut raw = tee_node();
        raw.variants.edges[0].node.sku = Some(String::new());
        let product = map_product(raw).unwrap();
        assert!(product.variants[0].sku.is_none());
    }

    #[test]
    fn test_unknown_currency_defaults_to_usd() {
        let mut raw = tee_node();
        raw.price_range.min_variant_price.currency_code = Some("ZZZ".to_string());
        let product = map_product(raw).unwrap();
        assert_eq!(product.price.currency, Currency::USD);
    }

    #[test]
    fn test_garbage_amount_is_malformed() {
        let mut raw = tee_node();
        raw.price_range.min_variant_price.amount = "not-a-number".to_string();
        let err = map_product(raw).unwrap_err();
        assert!(matches!(err, StorefrontError::Malformed { .. }));
    }
}
