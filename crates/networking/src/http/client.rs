//! Honeygain HTTP client with bearer-token authentication

use honeygain_core::{
    truncate_body, ClaimOutcome, ClaimResponse, EarningsResponse, EarningsSummary, Error, Result,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use tracing::{debug, error, instrument, warn};

const API_BASE: &str = "https://dashboard.honeygain.com/api/v1";

/// Address of the daily-reward claim endpoint (shown in reports)
pub const CLAIM_URL: &str = "https://dashboard.honeygain.com/api/v1/contest_winnings";

/// Dashboard address linked from the success report
pub const DASHBOARD_URL: &str = "https://dashboard.honeygain.com/";

/// HTTP client for the Honeygain dashboard API
///
/// Attaches the bearer token to every request. The token is never
/// validated locally; an expired or empty token surfaces as a rejected
/// claim from the server.
pub struct HoneygainClient {
    http: Client,
    token: String,
}

impl HoneygainClient {
    /// Create a new client with the given dashboard bearer token
    pub fn new(token: &str) -> Self {
        let http = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            token: token.to_string(),
        }
    }

    /// Default headers for dashboard requests
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token)).unwrap(),
        );
        headers
    }

    /// Claim the daily lucky-pot reward
    ///
    /// A non-200 status is returned as `ClaimOutcome::Rejected` with up to
    /// 1000 characters of the response body. Network failures and a
    /// malformed success body propagate as errors and end the run.
    #[instrument(skip(self))]
    pub async fn claim_daily_reward(&self) -> Result<ClaimOutcome> {
        debug!("Claiming daily reward");

        let response = self
            .http
            .post(CLAIM_URL)
            .headers(self.auth_headers())
            .send()
            .await?;

        let status = response.status();
        debug!("Claim response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Claim rejected: HTTP {}", status);
            return Ok(ClaimOutcome::Rejected {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let claim: ClaimResponse = response.json().await.map_err(|e| {
            error!("Failed to parse claim response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Daily reward claimed: {} credits", claim.data.credits);
        Ok(ClaimOutcome::Claimed {
            credits: claim.data.credits,
        })
    }

    /// Fetch the aggregate earnings summary
    ///
    /// Best effort: callers treat any error as summary-absent. A success
    /// body without a `data` key is also reported as absent.
    #[instrument(skip(self))]
    pub async fn earnings_summary(&self) -> Result<Option<EarningsSummary>> {
        let url = format!("{}/earnings/jt", API_BASE);

        debug!("Fetching earnings summary");

        let response = self
            .http
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::ApiError(format!(
                "Earnings request failed with status {}",
                status
            )));
        }

        let earnings: EarningsResponse = response.json().await.map_err(|e| {
            error!("Failed to parse earnings response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!(
            "Earnings summary fetched: total_credits={:?}, total_usd_cents={:?}",
            earnings.data.as_ref().and_then(|d| d.total_credits),
            earnings.data.as_ref().and_then(|d| d.total_usd_cents),
        );
        Ok(earnings.data)
    }
}
