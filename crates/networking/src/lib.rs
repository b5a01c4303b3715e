//! Honeygain Networking - dashboard HTTP client and webhook delivery

pub mod http;
pub mod webhook;

pub use http::HoneygainClient;
pub use webhook::DiscordWebhook;
