use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::errors::{DustError, Result};
use crate::models::{ItemCategory, PriceListing};

const OVERVIEW_BASE_URL: &str = "https://poe.ninja/api/data";

#[derive(Debug, Deserialize)]
struct ItemOverviewResponse {
    // absent when the league has no data for the requested type
    lines: Option<Vec<PriceListing>>,
}

#[derive(Debug, Deserialize)]
struct CurrencyOverviewResponse {
    lines: Option<Vec<CurrencyLine>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyLine {
    #[serde(default)]
    currency_type_name: String,
    #[serde(default)]
    chaos_equivalent: f64,
}

/// Thin client for the price overview endpoints. One instance per run;
/// requests are spaced out with a jittered delay.
pub struct NinjaApiClient {
    client: Client,
    league: String,
    last_request: Instant,
}

impl NinjaApiClient {
    pub fn new(league: String) -> Self {
        Self {
            client: Client::new(),
            league,
            last_request: Instant::now(),
        }
    }

    /// Fetch one category's raw price listings, stamped with the category.
    /// Returns `None` when the response body carries no listings array; the
    /// pipeline decides what that means.
    pub async fn fetch_price_listings(
        &mut self,
        category: &ItemCategory,
    ) -> Result<Option<Vec<PriceListing>>> {
        let overview_type = category.overview_type().ok_or_else(|| {
            DustError::InvalidArgument(format!("category {:?} has no price overview", category))
        })?;

        // Add some randomness to the delay to avoid synchronized bursts
        let delay = Duration::from_millis(500 + (rand::random::<u64>() % 100));
        self.respect_rate_limit(delay).await;

        let url = format!(
            "{}/itemoverview?league={}&type={}",
            OVERVIEW_BASE_URL, self.league, overview_type
        );
        debug!(%url, "fetching item overview");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DustError::ApiError(format!(
                "item overview request for {} failed with status {}",
                overview_type, status
            )));
        }

        let body: ItemOverviewResponse = response.json().await?;
        self.last_request = Instant::now();

        Ok(body.lines.map(|lines| {
            lines
                .into_iter()
                .map(|mut listing| {
                    listing.category = category.clone();
                    listing
                })
                .collect()
        }))
    }

    /// Scan the currency overview for the cheapest catalyst on the market.
    /// `None` when no catalyst is listed; the advisor falls back to its
    /// default price in that case.
    pub async fn fetch_cheapest_catalyst_price(&mut self) -> Result<Option<f64>> {
        let delay = Duration::from_millis(500 + (rand::random::<u64>() % 100));
        self.respect_rate_limit(delay).await;

        let url = format!(
            "{}/currencyoverview?league={}&type=Currency",
            OVERVIEW_BASE_URL, self.league
        );
        debug!(%url, "fetching currency overview");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DustError::ApiError(format!(
                "currency overview request failed with status {}",
                status
            )));
        }

        let body: CurrencyOverviewResponse = response.json().await?;
        self.last_request = Instant::now();

        Ok(cheapest_catalyst(&body.lines.unwrap_or_default()))
    }

    async fn respect_rate_limit(&self, delay: Duration) {
        let elapsed = self.last_request.elapsed();
        if elapsed < delay {
            tokio::time::sleep(delay - elapsed).await;
        }
    }
}

fn cheapest_catalyst(lines: &[CurrencyLine]) -> Option<f64> {
    lines
        .iter()
        .filter(|line| line.currency_type_name.ends_with(" Catalyst"))
        .map(|line| line.chaos_equivalent)
        .fold(None, |cheapest, price| match cheapest {
            Some(current) if current <= price => Some(current),
            _ => Some(price),
        })
}
