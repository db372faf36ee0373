//! Time values from Steam's servers.

use crate::error::Error;
use crate::helpers::API_HOSTNAME;
use crate::http::{check_ok, parse_body, HttpExecutor, HttpRequest};
use crate::serialize;
use crate::types::Timestamp;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

/// A date and time from Steam.
pub type ServerTime = DateTime<Utc>;

/// Provides the current time according to Steam's servers.
///
/// Confirmation keys are only accepted within a narrow window around Steam's clock, so every
/// key is generated with a timestamp obtained from an oracle immediately beforehand.
/// Implementations must not cache values between calls.
#[async_trait]
pub trait TimeOracle: Send + Sync {
    /// Gets the current time in seconds since the unix epoch.
    async fn now(&self) -> Result<Timestamp, Error>;
}

/// Gets the time by querying `ITwoFactorService/QueryTime`. Makes one request per call.
#[derive(Clone)]
pub struct SteamTimeOracle {
    client: Arc<dyn HttpExecutor>,
}

impl SteamTimeOracle {
    /// Creates a new [`SteamTimeOracle`] which makes its requests through `client`.
    pub fn new(client: Arc<dyn HttpExecutor>) -> Self {
        Self {
            client,
        }
    }
}

impl std::fmt::Debug for SteamTimeOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamTimeOracle").finish_non_exhaustive()
    }
}

#[async_trait]
impl TimeOracle for SteamTimeOracle {
    async fn now(&self) -> Result<Timestamp, Error> {
        #[derive(Deserialize)]
        struct QueryTime {
            #[serde(deserialize_with = "serialize::string_or_number")]
            server_time: Timestamp,
        }

        #[derive(Deserialize)]
        struct QueryTimeResponse {
            response: QueryTime,
        }

        let uri = format!("{API_HOSTNAME}/ITwoFactorService/QueryTime/v0001");
        let request = HttpRequest::post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        let response = self.client.execute(request).await?;
        let body = check_ok(response)?;
        let body: QueryTimeResponse = parse_body(&body)?;

        log::trace!("Steam server time is {}", body.response.server_time);

        Ok(body.response.server_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockExecutor;
    use reqwest::{Method, StatusCode};

    #[tokio::test]
    async fn queries_server_time() {
        let client = MockExecutor::new()
            .respond_json(r#"{"response":{"server_time":"1700000000","skew_tolerance_seconds":"60"}}"#);
        let oracle = SteamTimeOracle::new(client.clone());
        let time = oracle.now().await.unwrap();
        let requests = client.requests();

        assert_eq!(time, 1_700_000_000);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].url, "https://api.steampowered.com/ITwoFactorService/QueryTime/v0001");
        assert_eq!(requests[0].headers[CONTENT_TYPE], "application/x-www-form-urlencoded");
        assert!(requests[0].form.is_none());
    }

    #[tokio::test]
    async fn makes_a_request_for_every_call() {
        let client = MockExecutor::new()
            .respond_json(r#"{"response":{"server_time":100}}"#)
            .respond_json(r#"{"response":{"server_time":101}}"#);
        let oracle = SteamTimeOracle::new(client.clone());

        assert_eq!(oracle.now().await.unwrap(), 100);
        assert_eq!(oracle.now().await.unwrap(), 101);
        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn propagates_status_errors() {
        let client = MockExecutor::new()
            .respond(StatusCode::SERVICE_UNAVAILABLE, "");
        let oracle = SteamTimeOracle::new(client);
        let result = oracle.now().await;

        assert!(matches!(result, Err(Error::Http(StatusCode::SERVICE_UNAVAILABLE))));
    }

    #[tokio::test]
    async fn propagates_transport_errors() {
        let client = MockExecutor::new()
            .fail("operation timed out");
        let oracle = SteamTimeOracle::new(client);
        let error = oracle.now().await.unwrap_err();

        assert!(error.is_transport());
    }
}
