use clap::Parser;
use std::cmp::Ordering;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use poe_dust::data::{ignored_names, DustDataLoader};
use poe_dust::errors;
use poe_dust::fetcher::NinjaApiClient;
use poe_dust::models::ItemCategory;
use poe_dust::pipeline;

#[derive(Parser, Debug)]
#[command(name = "poe-dust", about = "Ranks unique items by disenchant dust per chaos")]
struct Args {
    /// League to pull prices for
    #[arg(long, default_value = "Standard")]
    league: String,

    /// Path to the static dust value dataset
    #[arg(long, default_value = "data/dust_values.json")]
    data: String,

    /// Number of rows to print
    #[arg(long, default_value_t = 25)]
    limit: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> errors::Result<()> {
    let mut loader = DustDataLoader::new();
    loader.load_from_file(&args.data).await?;
    info!(records = loader.len(), "loaded dust value dataset");

    let mut client = NinjaApiClient::new(args.league.clone());
    let mut batches = Vec::new();
    for category in ItemCategory::priced_categories() {
        let batch = client.fetch_price_listings(category).await?;
        info!(
            category = ?category,
            lines = batch.as_ref().map_or(0, |lines| lines.len()),
            "fetched price listings"
        );
        batches.push(batch);
    }
    let catalyst_price = client.fetch_cheapest_catalyst_price().await?;

    let output = pipeline::run(
        &batches,
        loader.records(),
        &ignored_names(),
        catalyst_price,
    )?;
    info!(items = output.items.len(), "merged price and dust data");

    let mut ranked = output.items;
    ranked.sort_by(|a, b| {
        b.dust_per_price
            .partial_cmp(&a.dust_per_price)
            .unwrap_or(Ordering::Equal)
    });

    println!(
        "{:<36} {:>10} {:>12} {:>12} {:>8} {:>9}",
        "Name", "Chaos", "Dust", "Dust/Chaos", "Listed", "Catalyst"
    );
    for item in ranked.iter().take(args.limit) {
        println!(
            "{:<36} {:>10.1} {:>12.0} {:>12.0} {:>8} {:>9}",
            item.name,
            item.price,
            item.dust_value,
            item.dust_per_price,
            item.listing_count,
            if item.recommend_catalyst { "yes" } else { "" }
        );
    }
    println!("Low-stock threshold: {} listings", output.scarcity_threshold);

    Ok(())
}
