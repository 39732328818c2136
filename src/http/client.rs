//! HTTP transport bound to a resolved connection
//!
//! Executes requests against a [`ConnectionConfig`]: builds target URLs,
//! signs every attempt with a freshly computed Authorization value, retries
//! retryable failures with capped exponential backoff, and decodes JSON
//! responses. Retry policy lives here, beneath the page-fetch operations
//! driven by [`crate::pagination::paginate`].

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Request timeout applied to every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// First backoff delay; doubles per retry attempt
const INITIAL_BACKOFF: Duration = Duration::from_millis(100);

/// Backoff ceiling
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// HTTP transport for one resolved connection
pub struct RestClient {
    client: Client,
    config: ConnectionConfig,
}

impl RestClient {
    /// Create a transport for the given connection
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// The connection this transport is bound to
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        self.request_json(Method::GET, path, query, None).await
    }

    /// Make a request and decode the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.execute(method, path, query, body).await?;
        let text = response.text().await.map_err(Error::Http)?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Execute a request, retrying retryable failures up to the connection's
    /// retry budget.
    ///
    /// The Authorization header is recomputed on every attempt, so cluster
    /// credentials carry a current timestamp even across backoff sleeps.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<Response> {
        let url = format!(
            "{}/{}",
            self.config.base_url(),
            path.trim_start_matches('/')
        );
        let max_retries = self.config.max_retries;

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            let mut req = self
                .client
                .request(method.clone(), &url)
                .header("Authorization", self.config.auth.authorization())
                .query(&[("originator", self.config.originator.as_str())]);

            if !query.is_empty() {
                req = req.query(&query);
            }
            if let Some(ref body) = body {
                req = req.json(body);
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        debug!("Request succeeded: {} {}", method, url);
                        return Ok(response);
                    }

                    let err = Error::status(
                        status.as_u16(),
                        response.text().await.unwrap_or_default(),
                    );
                    if err.is_retryable() && attempt < max_retries {
                        let delay = backoff(attempt);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(err);
                        continue;
                    }
                    return Err(err);
                }
                Err(e) => {
                    if e.is_timeout() {
                        let err = Error::Timeout {
                            timeout_ms: REQUEST_TIMEOUT.as_millis() as u64,
                        };
                        if attempt < max_retries {
                            let delay = backoff(attempt);
                            warn!(
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(err);
                            continue;
                        }
                        return Err(err);
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = backoff(attempt);
                        warn!(
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        Err(last_error.unwrap_or(Error::RetriesExhausted {
            attempts: max_retries + 1,
        }))
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Capped exponential backoff delay for a given attempt
fn backoff(attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt);
    std::cmp::min(INITIAL_BACKOFF * factor, MAX_BACKOFF)
}
