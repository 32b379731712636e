//! `vitrine checkout` - the non-functional checkout demo.
//!
//! Prints an order summary, clears the cart, and says so. No payment is
//! taken and no order is created anywhere.

use crate::context::Context;
use anyhow::Result;
use clap::Args;
use console::style;

#[derive(Args)]
pub struct CheckoutArgs {}

pub async fn run(_args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let (mut cart, notifications) = ctx.open_cart();

    if cart.is_empty() {
        ctx.output.info("Your cart is empty; nothing to check out.");
        return Ok(());
    }

    ctx.output.header("Order Summary");
    for item in cart.items() {
        println!(
            "{} x {}  {}",
            style(item.quantity).bold(),
            item.display_name(),
            item.line_total()
        );
    }
    println!("\ntotal {}", style(cart.total()).bold());

    cart.clear();
    ctx.drain_toasts(&notifications);

    ctx.output.success(
        "Thank you for your order! This checkout is a demo: no payment was taken and no \
         order was created.",
    );
    Ok(())
}
