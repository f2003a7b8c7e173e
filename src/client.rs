//! PagerDuty API client.
//!
//! Owns a [`Session`] and implements the [`Fetcher`] primitives on top of
//! it. Resource operations are provided by the traits on model types.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::{PagerDutyError, Result};
use crate::session::{Exchange, PaginationLimits, Session, SessionConfig};
use crate::traits::{Fetcher, JsonObject};

/// PagerDuty API client.
///
/// Handles authentication and HTTP requests. Entity-specific operations
/// are implemented via the `Get`, `List`, `Create`, `Update` and `Delete`
/// traits on model types, all of which accept any [`Fetcher`].
///
/// The client owns its session; dropping the client closes it. Share one
/// client between tasks by reference or through an `Arc`.
///
/// # Example
///
/// ```no_run
/// use pdapi::PagerDutyClient;
///
/// # fn example() -> pdapi::Result<()> {
/// // Create from environment variables
/// let client = PagerDutyClient::from_env()?;
///
/// // Or configure manually
/// let client = PagerDutyClient::new("your-api-key", "https://api.pagerduty.com")?;
/// # Ok(())
/// # }
/// ```
pub struct PagerDutyClient {
    session: Session,
}

impl fmt::Debug for PagerDutyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerDutyClient")
            .field("base_url", &self.session.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl PagerDutyClient {
    /// Create a client from environment variables.
    ///
    /// See [`SessionConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `PAGERDUTY_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(SessionConfig::from_env()?)
    }

    /// Create a new client with the provided key and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        Self::with_config(SessionConfig::new(api_key).with_base_url(base_url))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be opened.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            session: Session::open(&config)?,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        self.session.base_url()
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Close the session. Later requests fail with `SessionClosed`.
    pub fn close(&self) {
        self.session.close();
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Exchange> {
        let body = body.map(serde_json::to_vec).transpose()?;
        self.session.exchange(method, path, body).await
    }

    /// Compare the exchange status against the expected one.
    fn check_status(exchange: &Exchange, expected: StatusCode) -> Result<()> {
        if exchange.status == expected {
            return Ok(());
        }

        tracing::warn!(
            status = exchange.status.as_u16(),
            expected = expected.as_u16(),
            "unexpected response status"
        );
        Err(PagerDutyError::Status {
            message: exchange.status.canonical_reason().map(str::to_string),
            status: exchange.status.as_u16(),
        })
    }

    /// Validate the status, then parse the body as a JSON object.
    fn expect_json(exchange: Exchange, expected: StatusCode) -> Result<JsonObject> {
        Self::check_status(&exchange, expected)?;
        Ok(serde_json::from_str(&exchange.body)?)
    }
}

#[async_trait]
impl Fetcher for PagerDutyClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_json(&self, path: &str) -> Result<JsonObject> {
        let exchange = self.send(Method::GET, path, None).await?;
        Self::expect_json(exchange, StatusCode::OK)
    }

    #[tracing::instrument(skip(self, body))]
    async fn post_json(&self, path: &str, body: &Value) -> Result<JsonObject> {
        let exchange = self.send(Method::POST, path, Some(body)).await?;
        Self::expect_json(exchange, StatusCode::CREATED)
    }

    #[tracing::instrument(skip(self, body))]
    async fn put_json(&self, path: &str, body: &Value) -> Result<JsonObject> {
        let exchange = self.send(Method::PUT, path, Some(body)).await?;
        Self::expect_json(exchange, StatusCode::OK)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, path: &str, expected: StatusCode) -> Result<()> {
        let exchange = self.send(Method::DELETE, path, None).await?;
        Self::check_status(&exchange, expected)
    }

    fn pagination_limits(&self) -> PaginationLimits {
        self.session.pagination_limits()
    }
}
