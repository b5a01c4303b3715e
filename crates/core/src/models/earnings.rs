//! Earnings summary models for the /api/v1/earnings/jt endpoint

use serde::{Deserialize, Serialize};

/// Response from `GET /api/v1/earnings/jt`
///
/// The summary is best effort: a body without a `data` key parses as
/// absent rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EarningsResponse {
    #[serde(default)]
    pub data: Option<EarningsSummary>,
}

/// Aggregate earnings figures shown alongside a claim report
///
/// Cent counts are unsigned; a negative value from the server fails the
/// parse and the summary is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EarningsSummary {
    #[serde(default)]
    pub total_credits: Option<f64>,
    #[serde(default)]
    pub bonus_credits: Option<f64>,
    #[serde(default)]
    pub total_usd_cents: Option<u64>,
    #[serde(default)]
    pub bonus_usd_cents: Option<u64>,
}

impl EarningsSummary {
    /// Total earnings in dollars, when the server reported cents
    pub fn total_usd(&self) -> Option<f64> {
        self.total_usd_cents.map(|cents| cents as f64 / 100.0)
    }

    /// Bonus earnings in dollars, when the server reported cents
    pub fn bonus_usd(&self) -> Option<f64> {
        self.bonus_usd_cents.map(|cents| cents as f64 / 100.0)
    }
}

/// Format a cent count as dollars with two decimals, `-` when unknown
pub fn format_usd_cents(cents: Option<u64>) -> String {
    match cents {
        Some(cents) => format!("${:.2}", cents as f64 / 100.0),
        None => "-".to_string(),
    }
}

/// Display an optional credit amount, `-` when unknown
pub fn format_credits(credits: Option<f64>) -> String {
    match credits {
        Some(credits) => credits.to_string(),
        None => "-".to_string(),
    }
}
