//! Discord webhook delivery
//!
//! Sends the rich outcome embed as `{"embeds": [..]}` and the optional
//! follow-up mention as `{"content": ..}` to the same configured address.

use honeygain_core::{Error, Result, WebhookEmbed};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, instrument};

/// Client for a configured Discord webhook address
pub struct DiscordWebhook {
    http: Client,
    url: String,
}

impl DiscordWebhook {
    /// Create a sender for the given webhook address
    pub fn new(url: &str) -> Self {
        let http = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            url: url.to_string(),
        }
    }

    /// Deliver the rich outcome message
    ///
    /// Delivery failures propagate: there is no retry and no fallback
    /// once a webhook target is configured.
    #[instrument(skip(self, embed))]
    pub async fn send_embed(&self, embed: &WebhookEmbed) -> Result<()> {
        debug!("Delivering embed: {}", embed.title);

        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "embeds": [embed] }))
            .send()
            .await?;

        response
            .error_for_status()
            .map_err(|e| Error::WebhookError(e.to_string()))?;

        Ok(())
    }

    /// Deliver a plain text message (the mention sent after the embed)
    #[instrument(skip(self))]
    pub async fn send_content(&self, content: &str) -> Result<()> {
        debug!("Delivering mention message");

        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "content": content }))
            .send()
            .await?;

        response
            .error_for_status()
            .map_err(|e| Error::WebhookError(e.to_string()))?;

        Ok(())
    }
}
