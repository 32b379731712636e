//! `vitrine cart` - cart operations against the persisted cart.

use crate::context::Context;
use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use console::style;
use vitrine_commerce::cart::CartStore;
use vitrine_commerce::{ProductId, VariantId};

#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    command: CartCommand,
}

#[derive(Subcommand)]
enum CartCommand {
    /// Fetch a product and add a variant of it to the cart
    Add {
        /// Product handle
        handle: String,
        /// Variant name or ID; defaults to the product's first variant
        #[arg(long)]
        variant: Option<String>,
        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Show the cart contents
    Show,

    /// Set the quantity of a line already in the cart
    Update {
        /// Product handle
        handle: String,
        /// Variant name or ID; optional when the product has one line
        #[arg(long)]
        variant: Option<String>,
        /// New quantity; 0 removes the line
        #[arg(short, long)]
        quantity: i64,
    },

    /// Remove a line from the cart
    Remove {
        /// Product handle
        handle: String,
        /// Variant name or ID; optional when the product has one line
        #[arg(long)]
        variant: Option<String>,
    },

    /// Remove every line from the cart
    Clear,
}

pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let (mut cart, notifications) = ctx.open_cart();

    match args.command {
        CartCommand::Add {
            handle,
            variant,
            quantity,
        } => {
            let client = ctx.catalog()?;
            let product = client.product_by_handle(&handle).await?;
            let chosen = match &variant {
                Some(selector) => product
                    .variants
                    .iter()
                    .find(|v| v.name.eq_ignore_ascii_case(selector) || v.id.as_str() == selector)
                    .ok_or_else(|| {
                        anyhow!("product {handle:?} has no variant matching {selector:?}")
                    })?,
                None => product
                    .default_variant()
                    .ok_or_else(|| anyhow!("product {handle:?} has no variants"))?,
            };
            cart.add(&product, chosen, quantity);
        }
        CartCommand::Show => render(&cart, ctx),
        CartCommand::Update {
            handle,
            variant,
            quantity,
        } => {
            let (product_id, variant_id) = resolve_line(&cart, &handle, variant.as_deref())?;
            cart.update_quantity(&product_id, &variant_id, quantity);
        }
        CartCommand::Remove { handle, variant } => {
            let (product_id, variant_id) = resolve_line(&cart, &handle, variant.as_deref())?;
            cart.remove(&product_id, &variant_id);
        }
        CartCommand::Clear => cart.clear(),
    }

    ctx.drain_toasts(&notifications);
    Ok(())
}

/// Resolve a handle plus optional variant selector to a line key.
fn resolve_line(
    cart: &CartStore,
    handle: &str,
    selector: Option<&str>,
) -> Result<(ProductId, VariantId)> {
    let lines: Vec<_> = cart
        .items()
        .iter()
        .filter(|item| item.product.slug == handle)
        .collect();

    let line = match selector {
        Some(selector) => lines
            .iter()
            .find(|item| {
                item.variant.name.eq_ignore_ascii_case(selector)
                    || item.variant.id.as_str() == selector
            })
            .ok_or_else(|| {
                anyhow!("the cart has no line for {handle:?} with variant {selector:?}")
            })?,
        None => match lines.as_slice() {
            [] => return Err(anyhow!("the cart has no line for {handle:?}")),
            [only] => only,
            _ => {
                return Err(anyhow!(
                    "the cart has several variants of {handle:?}; pass --variant to pick one"
                ))
            }
        },
    };

    Ok((line.product.id.clone(), line.variant.id.clone()))
}

fn render(cart: &CartStore, ctx: &Context) {
    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    for item in cart.items() {
        println!(
            "{} x {}  {}",
            style(item.quantity).bold(),
            item.display_name(),
            item.line_total()
        );
    }
    println!(
        "\n{} item(s), total {}",
        cart.count(),
        style(cart.total()).bold()
    );
}
