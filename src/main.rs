use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use fuelrates::{fetch, parse_rates, select_latest};
use reqwest::Client;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) config from argv ─────────────────────────────────────────
    let mut args = env::args().skip(1);
    let feed_url = match args.next() {
        Some(raw) => Url::parse(&raw).with_context(|| format!("parsing feed URL {}", raw))?,
        None => bail!("usage: fuelrates <feed-url> [as-of-date YYYY-MM-DD]"),
    };
    let as_of = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("parsing as-of date {}", raw))?,
        None => Utc::now().date_naive(),
    };
    info!(url = %feed_url, %as_of, "startup");

    // ─── 3) fetch the feed ───────────────────────────────────────────
    let client = Client::new();
    let raw = fetch::fetch_feed_text(&client, &feed_url).await?;
    info!(bytes = raw.len(), "feed downloaded");

    // ─── 4) parse, surfacing per-entry diagnostics ───────────────────
    let parsed = parse_rates(&raw)?;
    for diag in &parsed.diagnostics {
        warn!("{}", diag);
    }
    info!(
        entries = parsed.entries.len(),
        skipped = parsed.diagnostics.len(),
        "feed parsed"
    );

    // ─── 5) select the applicable rate ───────────────────────────────
    match select_latest(&parsed.entries, as_of) {
        Some(rate) => info!(
            effective_date = %rate.effective_date,
            rate_percent = %rate.rate_percent,
            "applicable fuel surcharge"
        ),
        None => info!(%as_of, "no applicable rate"),
    }

    Ok(())
}
