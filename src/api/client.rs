use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Request, StatusCode};
use thiserror::Error;

use crate::api::constants::*;
use crate::models::session::SessionsResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("appointment API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("appointment API returned {status} for pincode {pincode}")]
    Status { pincode: String, status: StatusCode },
    #[error("malformed appointment response for pincode {pincode}: {source}")]
    MalformedResponse {
        pincode: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin wrapper over one reqwest client, reused across every sweep.
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        ApiClient {
            http: Client::new(),
        }
    }

    /// Fetch all sessions for one pincode on one date (`dd-mm-yyyy`).
    /// One GET, no retry, no timeout; any failure bubbles to the caller.
    pub async fn find_by_pin(
        &self,
        pincode: &str,
        date: &str,
    ) -> Result<SessionsResponse, ApiError> {
        let request = self.build_request(pincode, date)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                pincode: pincode.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse {
            pincode: pincode.to_string(),
            source,
        })
    }

    fn build_request(&self, pincode: &str, date: &str) -> Result<Request, ApiError> {
        let request = self
            .http
            .get(FIND_BY_PIN_URL)
            .query(&[(PARAM_PINCODE, pincode), (PARAM_DATE, date)])
            .header(ACCEPT, ACCEPT_VALUE)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
            .build()?;
        Ok(request)
    }
}
