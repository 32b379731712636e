//! Bundled sample catalog, used as the best-effort fallback when the
//! platform cannot be reached and for offline experimentation.

use vitrine_commerce::catalog::{Product, ProductImage, Variant};
use vitrine_commerce::{Currency, ImageId, Money, ProductId, VariantId};

/// The static sample products.
pub fn sample_products() -> Vec<Product> {
    vec![classic_tee(), canvas_tote()]
}

fn classic_tee() -> Product {
    Product {
        id: ProductId::new("gid://shopify/Product/1"),
        name: "Classic Tee (Sample)".to_string(),
        description_html: "<p>A comfortable and stylish classic t-shirt, perfect for everyday \
                           wear. Made from 100% premium cotton for a soft feel and lasting \
                           quality.</p>"
            .to_string(),
        price: Money::new(2999, Currency::USD),
        images: vec![
            ProductImage {
                id: ImageId::new("gid://shopify/ProductImage/1-1"),
                src: "https://placehold.co/600x800.png".to_string(),
                alt: "Classic Tee Front".to_string(),
            },
            ProductImage {
                id: ImageId::new("gid://shopify/ProductImage/1-2"),
                src: "https://placehold.co/600x800.png".to_string(),
                alt: "Classic Tee Back".to_string(),
            },
        ],
        variants: vec![
            Variant {
                id: VariantId::new("gid://shopify/ProductVariant/1-s"),
                name: "Small".to_string(),
                sku: Some("CT-SML-BLK".to_string()),
                price: Money::new(2999, Currency::USD),
                stock: 10,
                available_for_sale: true,
                image_id: Some(ImageId::new("gid://shopify/ProductImage/1-1")),
            },
            Variant {
                id: VariantId::new("gid://shopify/ProductVariant/1-m"),
                name: "Medium".to_string(),
                sku: Some("CT-MED-BLK".to_string()),
                price: Money::new(2999, Currency::USD),
                stock: 15,
                available_for_sale: true,
                image_id: Some(ImageId::new("gid://shopify/ProductImage/1-1")),
            },
            Variant {
                id: VariantId::new("gid://shopify/ProductVariant/1-l"),
                name: "Large".to_string(),
                sku: Some("CT-LRG-BLK".to_string()),
                price: Money::new(2999, Currency::USD),
                stock: 0,
                available_for_sale: false,
                image_id: Some(ImageId::new("gid://shopify/ProductImage/1-1")),
            },
        ],
        slug: "classic-tee-sample".to_string(),
        tags: vec![
            "apparel".to_string(),
            "t-shirt".to_string(),
            "classic".to_string(),
        ],
    }
}

fn canvas_tote() -> Product {
    Product {
        id: ProductId::new("gid://shopify/Product/2"),
        name: "Canvas Tote (Sample)".to_string(),
        description_html: "<p>A sturdy everyday tote in heavyweight natural canvas, with an \
                           interior pocket and reinforced handles.</p>"
            .to_string(),
        price: Money::new(1899, Currency::USD),
        images: vec![ProductImage {
            id: ImageId::new("gid://shopify/ProductImage/2-1"),
            src: "https://placehold.co/600x800.png".to_string(),
            alt: "Canvas Tote".to_string(),
        }],
        variants: vec![Variant {
            id: VariantId::new("gid://shopify/ProductVariant/2-one"),
            name: "One Size".to_string(),
            sku: Some("TOTE-NAT".to_string()),
            price: Money::new(1899, Currency::USD),
            stock: 0,
            available_for_sale: true,
            image_id: Some(ImageId::new("gid://shopify/ProductImage/2-1")),
        }],
        slug: "canvas-tote-sample".to_string(),
        tags: vec!["accessories".to_string(), "bag".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_slugs_are_unique() {
        let products = sample_products();
        let mut slugs: Vec<_> = products.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn test_variant_image_references_resolve() {
        for product in sample_products() {
            for variant in &product.variants {
                if let Some(image_id) = &variant.image_id {
                    assert!(product.image(image_id).is_some());
                }
            }
        }
    }

    #[test]
    fn test_sample_covers_stock_semantics() {
        let products = sample_products();
        // At least one sold-out variant and one untracked-but-purchasable one,
        // so the fallback exercises the same stock semantics as live data.
        assert!(products
            .iter()
            .flat_map(|p| &p.variants)
            .any(|v| !v.available_for_sale));
        assert!(products
            .iter()
            .flat_map(|p| &p.variants)
            .any(|v| v.available_for_sale && v.stock == 0));
    }
}
