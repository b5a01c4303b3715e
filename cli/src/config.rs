//! Environment-supplied configuration

use std::env;

/// Environment variable holding the dashboard bearer token
pub const TOKEN_ENV: &str = "HONEYGAIN_TOKEN";

/// Environment variable holding the Discord webhook address
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Environment variable holding the mention text, e.g. "@everyone"
pub const PING_ENV: &str = "PING_MESSAGE";

/// Configuration for one claim run
///
/// Every option defaults to absent/empty when unset. An empty token is
/// passed through as-is and rejected by the server; remote notification
/// is disabled entirely without a webhook address.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bearer token attached to every dashboard request
    pub token: String,
    /// Webhook address receiving formatted outcome messages
    pub webhook_url: Option<String>,
    /// Mention text sent as a second message after the embed
    pub ping_message: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self {
            token: env::var(TOKEN_ENV).unwrap_or_default(),
            webhook_url: non_empty(env::var(WEBHOOK_ENV).ok()),
            ping_message: non_empty(env::var(PING_ENV).ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
