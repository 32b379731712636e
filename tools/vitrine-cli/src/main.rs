//! Vitrine CLI - a terminal storefront over the catalog client and cart.
//!
//! Commands:
//! - `vitrine shop` - browse the product listing
//! - `vitrine product <handle>` - product detail
//! - `vitrine cart add|show|update|remove|clear` - cart operations
//! - `vitrine checkout` - the non-functional checkout demo

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CheckoutArgs, ProductArgs, ShopArgs};

/// Vitrine - headless storefront demo
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the persisted cart
    #[arg(long, global = true, env = "VITRINE_CART_DIR")]
    cart_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product listing
    Shop(ShopArgs),

    /// Show a single product by handle
    Product(ProductArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Run the checkout demo (clears the cart, takes no payment)
    Checkout(CheckoutArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let ctx = context::Context::new(cli.cart_dir, output::Output::new(cli.verbose));

    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
