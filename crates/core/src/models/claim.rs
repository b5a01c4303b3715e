//! Claim models for the /api/v1/contest_winnings endpoint

use serde::{Deserialize, Serialize};

/// Maximum characters of raw response text kept from a rejected claim
pub const RESPONSE_PREVIEW_CHARS: usize = 1000;

/// Response body of a successful `POST /api/v1/contest_winnings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub data: ClaimData,
}

/// Payload of a successful claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimData {
    /// Credits awarded by the daily lucky pot.
    /// Kept as a raw JSON number so reports show the exact wire value.
    pub credits: serde_json::Number,
}

/// Outcome of one claim attempt
///
/// A non-200 response is a recognized outcome, not an error: the run
/// continues to the failure report. Network and parse failures on the
/// claim call itself are `Error`s and terminate the run.
#[derive(Debug, Clone)]
pub enum ClaimOutcome {
    /// Status 200; credits parsed from `data.credits`
    Claimed { credits: serde_json::Number },
    /// Any other status, with the body truncated at capture
    Rejected { status: u16, body: String },
}

impl ClaimOutcome {
    /// Whether the reward was actually credited
    pub fn is_claimed(&self) -> bool {
        matches!(self, ClaimOutcome::Claimed { .. })
    }
}

/// Truncate a raw response body for the failure report
pub fn truncate_body(body: &str) -> String {
    body.chars().take(RESPONSE_PREVIEW_CHARS).collect()
}
