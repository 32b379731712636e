//! `vitrine shop` - browse the product listing.

use crate::context::Context;
use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use vitrine_storefront::{Availability, ListProducts, ProductSortKey, DEFAULT_PAGE_SIZE};

#[derive(Args)]
pub struct ShopArgs {
    /// Free-text search query
    #[arg(short, long)]
    query: Option<String>,

    /// Availability filter
    #[arg(long, value_enum, default_value_t = AvailabilityArg::All)]
    availability: AvailabilityArg,

    /// Sort key
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,

    /// Page size
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    first: u32,

    /// Forward cursor printed by the previous page
    #[arg(long)]
    after: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AvailabilityArg {
    All,
    InStock,
    OutOfStock,
}

impl From<AvailabilityArg> for Availability {
    fn from(value: AvailabilityArg) -> Self {
        match value {
            AvailabilityArg::All => Availability::All,
            AvailabilityArg::InStock => Availability::InStock,
            AvailabilityArg::OutOfStock => Availability::OutOfStock,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Title,
    Price,
    Created,
    Updated,
    BestSelling,
    Relevance,
    Id,
}

impl From<SortArg> for ProductSortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Title => ProductSortKey::Title,
            SortArg::Price => ProductSortKey::Price,
            SortArg::Created => ProductSortKey::CreatedAt,
            SortArg::Updated => ProductSortKey::UpdatedAt,
            SortArg::BestSelling => ProductSortKey::BestSelling,
            SortArg::Relevance => ProductSortKey::Relevance,
            SortArg::Id => ProductSortKey::Id,
        }
    }
}

pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let client = ctx.catalog()?;

    let mut request = ListProducts::new()
        .with_first(args.first)
        .with_availability(args.availability.into());
    if let Some(query) = args.query {
        request = request.with_query(query);
    }
    if let Some(sort) = args.sort {
        request = request.with_sort(sort.into());
    }
    if args.reverse {
        request = request.reversed();
    }
    if let Some(after) = args.after {
        request = request.with_after(after);
    }

    let listing = client.list_products(&request).await;

    if let Some(error) = &listing.error {
        ctx.output.error(&error.to_string());
        ctx.output.warn("Showing the bundled sample catalog instead.");
    }

    ctx.output.header("Products");
    if listing.products.is_empty() {
        ctx.output.info("No products match this listing.");
        return Ok(());
    }

    for product in &listing.products {
        let availability = if product.is_purchasable() {
            style("available").green()
        } else {
            style("sold out").red()
        };
        println!(
            "{}  {}  {}  [{}]",
            style(&product.slug).cyan(),
            product.name,
            product.price,
            availability
        );
    }

    // Forward-only pagination: only the end cursor is surfaced.
    if listing.page_info.has_next_page {
        match &listing.page_info.end_cursor {
            Some(cursor) => ctx.output.info(&format!(
                "More products available. Pass --after {cursor:?} for the next page."
            )),
            None => ctx.output.info("More products available."),
        }
    }

    Ok(())
}
