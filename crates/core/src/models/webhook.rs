//! Discord webhook payload models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A name/value display field inside an embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Footer line shown under an embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Rich message delivered as `{"embeds": [..]}` to the webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEmbed {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub color: u32,
    /// Serialized as RFC 3339; Discord renders it in the viewer's locale
    pub timestamp: DateTime<Utc>,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialized_shape() {
        let embed = WebhookEmbed {
            title: "t".into(),
            description: "d".into(),
            url: None,
            color: 0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
            fields: vec![EmbedField::new("Status", "200", true)],
            footer: EmbedFooter { text: "f".into() },
        };
        let value = serde_json::to_value(&embed).unwrap();
        assert!(value.get("url").is_none());
        assert_eq!(value["timestamp"], "2025-03-14T09:26:53Z");
        assert_eq!(value["fields"][0]["inline"], true);
    }
}
