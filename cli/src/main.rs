//! Honeygain claimer - Main entry point
//!
//! One pass per invocation: claim the daily reward, optionally fetch the
//! earnings summary, then deliver the outcome to the configured webhook
//! or print it to stdout. Scheduling is external (cron or similar).

mod config;
mod report;

use anyhow::Result;
use config::Config;
use honeygain_networking::{DiscordWebhook, HoneygainClient};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Delay before the summary fetch after a successful claim
const SETTLE_DELAY_SECS: u64 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "honeygain_claimer=debug,honeygain_networking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Honeygain auto claim");

    let config = Config::from_env();
    run(config).await
}

/// Execute one claim-and-notify pass
///
/// Claim and delivery failures propagate and end the run with a nonzero
/// exit; only the summary fetch is recovered.
async fn run(config: Config) -> Result<()> {
    let client = HoneygainClient::new(&config.token);

    let outcome = client.claim_daily_reward().await?;

    let summary = if config.webhook_url.is_some() {
        if outcome.is_claimed() {
            // Wait for credits to update before fetching totals
            tokio::time::sleep(Duration::from_secs(SETTLE_DELAY_SECS)).await;
        }
        match client.earnings_summary().await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Earnings summary unavailable: {}", e);
                None
            }
        }
    } else {
        None
    };

    match report::plan_notification(&config, &outcome, summary.as_ref(), chrono::Utc::now()) {
        Some(plan) => {
            let webhook = DiscordWebhook::new(&plan.webhook_url);
            webhook.send_embed(&plan.embed).await?;
            if let Some(ping) = &plan.ping {
                webhook.send_content(ping).await?;
            }
            tracing::info!("Outcome delivered to webhook");
        }
        None => println!("{}", report::outcome_message(&outcome)),
    }

    Ok(())
}
