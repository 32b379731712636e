//! Wire shapes of the Storefront API responses.
//!
//! These mirror the GraphQL connection structure (edges/node) verbatim and
//! exist only long enough to be mapped into domain types.

use serde::Deserialize;
use vitrine_commerce::catalog::PageInfo;

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsData {
    pub products: ProductConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductConnection {
    #[serde(default)]
    pub edges: Vec<ProductEdge>,
    #[serde(default)]
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductEdge {
    pub node: ProductNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductByHandleData {
    pub product_by_handle: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub images: ImageConnection,
    #[serde(default)]
    pub variants: VariantConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceRange {
    pub min_variant_price: MoneyV2,
}

/// The platform's money shape: a decimal-string amount plus currency code.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoneyV2 {
    pub amount: String,
    #[serde(default)]
    pub currency_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageConnection {
    #[serde(default)]
    pub edges: Vec<ImageEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageEdge {
    pub node: ImageNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageNode {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VariantConnection {
    #[serde(default)]
    pub edges: Vec<VariantEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariantEdge {
    pub node: VariantNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariantNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Sellable units; the platform reports null for untracked inventory.
    #[serde(default)]
    pub quantity_available: Option<i64>,
    pub available_for_sale: bool,
    pub price_v2: MoneyV2,
    #[serde(default)]
    pub image: Option<ImageNode>,
}
