//! Transport session.
//!
//! A [`Session`] owns the HTTP connection pool, the authorization header and
//! the connection limiter for one client. It is closed explicitly with
//! [`Session::close`] or implicitly when dropped; once closed every request
//! fails with [`PagerDutyError::SessionClosed`].

use std::env;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use tokio::sync::{Semaphore, SemaphorePermit};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{PagerDutyError, Result};

/// Default PagerDuty API origin.
pub const DEFAULT_API_URL: &str = "https://api.pagerduty.com";

/// Maximum number of concurrent exchanges per session.
pub const DEFAULT_MAX_CONNECTIONS: usize = 25;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default cap on pages fetched by one paginated call.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

const USER_AGENT: &str = concat!("pdapi/", env!("CARGO_PKG_VERSION"));
const ACCEPT_V2: &str = "application/vnd.pagerduty+json;version=2";

/// Bounds applied to every paginated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationLimits {
    /// Maximum number of pages fetched before the call fails.
    pub max_pages: u32,
    /// Maximum number of items accumulated before the call fails.
    pub max_items: Option<usize>,
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_items: None,
        }
    }
}

/// Settings used to open a [`Session`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use pdapi::SessionConfig;
///
/// let config = SessionConfig::new("my-api-key")
///     .with_base_url("http://localhost:8080")
///     .with_timeout(Duration::from_secs(10))
///     .with_max_pages(50);
/// assert_eq!(config.base_url, "http://localhost:8080");
/// ```
#[derive(Clone)]
pub struct SessionConfig {
    api_key: String,
    /// API origin, `https://api.pagerduty.com` unless overridden.
    pub base_url: String,
    /// Concurrent exchange limit.
    pub max_connections: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Pagination safeguards.
    pub pagination: PaginationLimits,
    /// Token that aborts in-flight and future requests when cancelled.
    pub cancellation: Option<CancellationToken>,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("base_url", &self.base_url)
            .field("max_connections", &self.max_connections)
            .field("timeout", &self.timeout)
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

impl SessionConfig {
    /// Create a configuration with defaults for everything but the key.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            timeout: DEFAULT_TIMEOUT,
            pagination: PaginationLimits::default(),
            cancellation: None,
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `PAGERDUTY_API_KEY` (required), and optionally
    /// `PAGERDUTY_API_URL`, `PAGERDUTY_TIMEOUT_SECS` and `PAGERDUTY_MAX_PAGES`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PAGERDUTY_API_KEY` is not set or an optional
    /// variable does not parse.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PAGERDUTY_API_KEY").map_err(|_| {
            PagerDutyError::ConfigMissing(
                "PAGERDUTY_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut config = Self::new(&api_key);

        if let Ok(url) = env::var("PAGERDUTY_API_URL") {
            config.base_url = url;
        }
        if let Some(secs) = parse_env::<u64>("PAGERDUTY_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(pages) = parse_env::<u32>("PAGERDUTY_MAX_PAGES")? {
            config.pagination.max_pages = pages;
        }

        Ok(config)
    }

    /// Override the API origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the concurrent exchange limit.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Override the page cap for paginated calls.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.pagination.max_pages = max_pages;
        self
    }

    /// Cap the number of items a paginated call may accumulate.
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.pagination.max_items = Some(max_items);
        self
    }

    /// Abort requests when `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            PagerDutyError::InvalidArgument(format!("{name} has an invalid value: {raw}"))
        }),
        Err(_) => Ok(None),
    }
}

/// Raw outcome of one HTTP exchange, body fully drained.
#[derive(Debug)]
pub(crate) struct Exchange {
    pub status: StatusCode,
    pub body: String,
}

/// Scoped connection and authentication context.
///
/// Opening a session performs no network I/O; the pool is used lazily by
/// the first request. Each exchange holds one of `max_connections` permits
/// until its response body has been read.
pub struct Session {
    http: RwLock<Option<Client>>,
    base_url: Url,
    permits: Semaphore,
    cancel: CancellationToken,
    pagination: PaginationLimits,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Open a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid, the key cannot be used
    /// as a header value, or the HTTP client cannot be built.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        // Ensure base URL ends with / so relative joins keep any path prefix
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };
        let base_url = Url::parse(&base_url_str)?;

        let mut auth = HeaderValue::from_str(&format!("Token token={}", config.api_key))
            .map_err(|_| {
                PagerDutyError::InvalidArgument(
                    "API key contains characters not allowed in a header".to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V2));

        let max_connections = config.max_connections.clamp(1, Semaphore::MAX_PERMITS);
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .pool_max_idle_per_host(max_connections)
            .build()?;

        tracing::debug!(base_url = %base_url, max_connections, "session opened");

        Ok(Self {
            http: RwLock::new(Some(http)),
            base_url,
            permits: Semaphore::new(max_connections),
            cancel: config.cancellation.clone().unwrap_or_default(),
            pagination: config.pagination,
        })
    }

    /// Close the session and release its connection pool.
    ///
    /// Safe to call more than once. Requests already holding a connection
    /// run to completion; every later request fails with `SessionClosed`.
    pub fn close(&self) {
        self.permits.close();
        let released = self
            .http
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            tracing::debug!(base_url = %self.base_url, "session closed");
        }
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }

    /// The API origin requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The token that cancels this session's requests.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Pagination safeguards configured for this session.
    pub fn pagination_limits(&self) -> PaginationLimits {
        self.pagination
    }

    /// Resolve a relative API path against the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn acquire(&self) -> Result<(SemaphorePermit<'_>, Client)> {
        if self.is_closed() {
            return Err(PagerDutyError::SessionClosed);
        }
        let permit = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(PagerDutyError::Cancelled),
            permit = self.permits.acquire() => permit.map_err(|_| PagerDutyError::SessionClosed)?,
        };
        let http = self
            .http
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(PagerDutyError::SessionClosed)?;
        Ok((permit, http))
    }

    /// Perform one exchange and drain the response body.
    ///
    /// The status is not inspected here.
    pub(crate) async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Exchange> {
        let (_permit, http) = self.acquire().await?;
        let url = self.url(path)?;

        let mut request = http.request(method, url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let send = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, PagerDutyError>(Exchange { status, body })
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(PagerDutyError::Cancelled),
            result = send => result,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_debug_hides_key() {
        let config = SessionConfig::new("secret-key");
        let debug = format!("{config:?}");
        assert!(debug.contains("SessionConfig"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_config_defaults() {
        let config = SessionConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.pagination, PaginationLimits::default());
        assert!(config.cancellation.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let s1 = Session::open(&SessionConfig::new("k").with_base_url("http://h/api")).unwrap();
        let s2 = Session::open(&SessionConfig::new("k").with_base_url("http://h/api/")).unwrap();
        assert_eq!(s1.base_url().as_str(), s2.base_url().as_str());
        assert_eq!(s1.url("/services").unwrap().as_str(), "http://h/api/services");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Session::open(&SessionConfig::new("k").with_base_url("not a url"));
        assert!(matches!(result, Err(PagerDutyError::Url(_))));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let result = Session::open(&SessionConfig::new("bad\nkey"));
        assert!(matches!(result, Err(PagerDutyError::InvalidArgument(_))));
    }

    #[test]
    fn test_connection_limit_is_clamped() {
        let session =
            Session::open(&SessionConfig::new("k").with_max_connections(usize::MAX)).unwrap();
        assert_eq!(session.permits.available_permits(), Semaphore::MAX_PERMITS);

        let session = Session::open(&SessionConfig::new("k").with_max_connections(0)).unwrap();
        assert_eq!(session.permits.available_permits(), 1);
    }

    #[tokio::test]
    async fn test_close_is_idempotent_and_fails_fast() {
        let session = Session::open(&SessionConfig::new("k")).unwrap();
        assert!(!session.is_closed());

        session.close();
        session.close();
        assert!(session.is_closed());

        let result = session.exchange(Method::GET, "services", None).await;
        assert!(matches!(result, Err(PagerDutyError::SessionClosed)));
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let session =
            Session::open(&SessionConfig::new("k").with_cancellation(token)).unwrap();

        let result = session.exchange(Method::GET, "services", None).await;
        assert!(matches!(result, Err(PagerDutyError::Cancelled)));
    }
}
