//! Builds the webhook messages for a claim run
//!
//! Field layout and colors match the dashboard's own presentation:
//! credits as reported by the API, USD derived from integer cent counts.

use crate::config::Config;
use chrono::{DateTime, Utc};
use honeygain_core::{
    format_credits, format_usd_cents, ClaimOutcome, EarningsSummary, EmbedField, EmbedFooter,
    WebhookEmbed,
};
use honeygain_networking::http::{CLAIM_URL, DASHBOARD_URL};

/// Embed color for a successful claim (gold)
const SUCCESS_COLOR: u32 = 16766720;

/// Embed color for a failed claim (red)
const FAILURE_COLOR: u32 = 16007990;

/// Footer shown on every embed
const FOOTER_TEXT: &str = "Honeygain Auto Claim";

/// Messages planned for one run: the rich embed, then an optional mention
#[derive(Debug, Clone)]
pub struct Notification {
    pub webhook_url: String,
    pub embed: WebhookEmbed,
    /// Sent as a second, plain-text delivery after the embed
    pub ping: Option<String>,
}

/// One-line outcome message for stdout when no webhook is configured
pub fn outcome_message(outcome: &ClaimOutcome) -> String {
    match outcome {
        ClaimOutcome::Claimed { credits } => format!(
            "Successfully earned {} credits from the honeygain daily reward!",
            credits
        ),
        ClaimOutcome::Rejected { status, .. } => {
            format!("Daily reward failed with status {}", status)
        }
    }
}

/// Decide the deliveries for this run
///
/// Returns `None` when no webhook target is configured, in which case the
/// outcome goes to stdout and zero delivery calls are made. The mention is
/// attached only when both a target and a mention text are configured.
pub fn plan_notification(
    config: &Config,
    outcome: &ClaimOutcome,
    summary: Option<&EarningsSummary>,
    now: DateTime<Utc>,
) -> Option<Notification> {
    let webhook_url = config.webhook_url.clone()?;

    Some(Notification {
        webhook_url,
        embed: build_embed(outcome, summary, now),
        ping: config.ping_message.clone(),
    })
}

/// Build the embed for a claim outcome, with summary figures when available
pub fn build_embed(
    outcome: &ClaimOutcome,
    summary: Option<&EarningsSummary>,
    now: DateTime<Utc>,
) -> WebhookEmbed {
    let mut embed = match outcome {
        ClaimOutcome::Claimed { credits } => success_embed(credits, now),
        ClaimOutcome::Rejected { status, body } => failure_embed(*status, body, now),
    };

    if let Some(summary) = summary {
        embed.fields.extend(summary_fields(summary));
    }

    embed
}

fn success_embed(credits: &serde_json::Number, now: DateTime<Utc>) -> WebhookEmbed {
    WebhookEmbed {
        title: "Honeygain Daily Reward Claimed".to_string(),
        description: format!(
            "Successfully earned {} credits from the honeygain daily reward!",
            credits
        ),
        url: Some(DASHBOARD_URL.to_string()),
        color: SUCCESS_COLOR,
        timestamp: now,
        fields: vec![
            EmbedField::new("Credits", credits.to_string(), true),
            EmbedField::new("UTC Time", now.format("%Y-%m-%d %H:%M:%S").to_string(), true),
            EmbedField::new("Endpoint", CLAIM_URL, false),
            EmbedField::new("Status", "200", true),
        ],
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
        },
    }
}

fn failure_embed(status: u16, body: &str, now: DateTime<Utc>) -> WebhookEmbed {
    let response = if body.is_empty() { "(empty)" } else { body };

    WebhookEmbed {
        title: "Honeygain Daily Reward Failed".to_string(),
        description: format!("Daily reward failed with status {}", status),
        url: None,
        color: FAILURE_COLOR,
        timestamp: now,
        fields: vec![
            EmbedField::new("Endpoint", CLAIM_URL, false),
            EmbedField::new("Status", status.to_string(), true),
            EmbedField::new("Response", response, false),
        ],
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
        },
    }
}

fn summary_fields(summary: &EarningsSummary) -> Vec<EmbedField> {
    vec![
        EmbedField::new("Total Credits", format_credits(summary.total_credits), true),
        EmbedField::new("Bonus Credits", format_credits(summary.bonus_credits), true),
        EmbedField::new("Total USD", format_usd_cents(summary.total_usd_cents), true),
        EmbedField::new("Bonus USD", format_usd_cents(summary.bonus_usd_cents), true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn claimed(credits: &str) -> ClaimOutcome {
        ClaimOutcome::Claimed {
            credits: credits.parse().unwrap(),
        }
    }

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    fn field<'a>(embed: &'a WebhookEmbed, name: &str) -> &'a str {
        &embed
            .fields
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("missing field {}", name))
            .value
    }

    #[test]
    fn test_success_embed_reports_credits_verbatim() {
        let embed = build_embed(&claimed("4.1"), None, test_now());

        assert_eq!(embed.color, SUCCESS_COLOR);
        assert_eq!(field(&embed, "Credits"), "4.1");
        assert_eq!(field(&embed, "Status"), "200");
        assert_eq!(field(&embed, "Endpoint"), CLAIM_URL);
        assert_eq!(field(&embed, "UTC Time"), "2025-03-14 09:26:53");
        assert!(embed.description.contains("4.1 credits"));
        assert_eq!(embed.url.as_deref(), Some(DASHBOARD_URL));
        assert_eq!(embed.fields.len(), 4);
    }

    #[test]
    fn test_integer_credits_stay_integer() {
        let embed = build_embed(&claimed("15"), None, test_now());
        assert_eq!(field(&embed, "Credits"), "15");
    }

    #[test]
    fn test_failure_embed_shows_status_and_body() {
        let outcome = ClaimOutcome::Rejected {
            status: 429,
            body: "too many requests".to_string(),
        };
        let embed = build_embed(&outcome, None, test_now());

        assert_eq!(embed.color, FAILURE_COLOR);
        assert_eq!(embed.description, "Daily reward failed with status 429");
        assert_eq!(field(&embed, "Status"), "429");
        assert_eq!(field(&embed, "Response"), "too many requests");
        assert!(embed.url.is_none());
        assert_eq!(embed.fields.len(), 3);
    }

    #[test]
    fn test_failure_embed_placeholder_for_empty_body() {
        let outcome = ClaimOutcome::Rejected {
            status: 502,
            body: String::new(),
        };
        let embed = build_embed(&outcome, None, test_now());
        assert_eq!(field(&embed, "Response"), "(empty)");
    }

    #[test]
    fn test_summary_fields_appended_when_present() {
        let summary = EarningsSummary {
            total_credits: Some(120.5),
            bonus_credits: None,
            total_usd_cents: Some(1234),
            bonus_usd_cents: None,
        };
        let embed = build_embed(&claimed("15"), Some(&summary), test_now());

        assert_eq!(embed.fields.len(), 8);
        assert_eq!(field(&embed, "Total Credits"), "120.5");
        assert_eq!(field(&embed, "Bonus Credits"), "-");
        assert_eq!(field(&embed, "Total USD"), "$12.34");
        assert_eq!(field(&embed, "Bonus USD"), "-");
    }

    #[test]
    fn test_summary_fields_follow_failure_embed_too() {
        let outcome = ClaimOutcome::Rejected {
            status: 400,
            body: "bad request".to_string(),
        };
        let summary = EarningsSummary {
            total_usd_cents: Some(100),
            ..Default::default()
        };
        let embed = build_embed(&outcome, Some(&summary), test_now());
        assert_eq!(embed.fields.len(), 7);
        assert_eq!(field(&embed, "Total USD"), "$1.00");
    }

    #[test]
    fn test_plan_requires_webhook_target() {
        let outcome = claimed("15");

        let config = Config::default();
        assert!(plan_notification(&config, &outcome, None, test_now()).is_none());

        let config = Config {
            webhook_url: Some("https://discord.test/hook".to_string()),
            ..Default::default()
        };
        let plan = plan_notification(&config, &outcome, None, test_now()).unwrap();
        assert_eq!(plan.webhook_url, "https://discord.test/hook");
        assert!(plan.ping.is_none());
    }

    #[test]
    fn test_plan_attaches_ping_after_embed() {
        let config = Config {
            webhook_url: Some("https://discord.test/hook".to_string()),
            ping_message: Some("@everyone".to_string()),
            ..Default::default()
        };
        let plan = plan_notification(&config, &claimed("15"), None, test_now()).unwrap();
        assert_eq!(plan.ping.as_deref(), Some("@everyone"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome_message(&claimed("15")),
            "Successfully earned 15 credits from the honeygain daily reward!"
        );
        let rejected = ClaimOutcome::Rejected {
            status: 401,
            body: String::new(),
        };
        assert_eq!(
            outcome_message(&rejected),
            "Daily reward failed with status 401"
        );
    }
}
