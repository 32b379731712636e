//! `vitrine product` - product detail by handle.

use crate::context::Context;
use anyhow::Result;
use clap::Args;
use console::style;
use vitrine_commerce::catalog::Product;
use vitrine_storefront::StorefrontError;

#[derive(Args)]
pub struct ProductArgs {
    /// Product handle (URL slug)
    handle: String,
}

pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let client = ctx.catalog()?;

    match client.product_by_handle(&args.handle).await {
        Ok(product) => render(&product, ctx),
        // Absence is a meaningful state, not a failure of this command.
        Err(StorefrontError::NotFound { handle }) => {
            ctx.output
                .warn(&format!("No product matches the handle {handle:?}."));
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn render(product: &Product, ctx: &Context) {
    ctx.output.header(&product.name);
    println!("handle: {}", style(&product.slug).cyan());
    println!("from:   {}", product.price);
    if !product.tags.is_empty() {
        println!("tags:   {}", product.tags.join(", "));
    }
    if !product.description_html.is_empty() {
        println!("\n{}", product.description_html);
    }

    if !product.images.is_empty() {
        ctx.output.header("Images");
        for image in &product.images {
            println!("{}  {}", image.src, style(&image.alt).dim());
        }
    }

    ctx.output.header("Variants");
    for variant in &product.variants {
        let stock = if variant.tracks_inventory() {
            format!("{} in stock", variant.stock)
        } else {
            "stock untracked".to_string()
        };
        let state = if variant.available_for_sale {
            style("available").green()
        } else {
            style("unavailable").red()
        };
        println!(
            "{}  {}  {}  [{}]  {}",
            variant.name,
            variant.sku.as_deref().unwrap_or("-"),
            variant.price,
            state,
            style(stock).dim()
        );
    }
}
