// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Abode cloud API.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Method, Transport};
use crate::urls;

// ============================================================================
// HttpConfig - Configuration for the Abode HTTP transport
// ============================================================================

/// Configuration for the Abode HTTP transport.
///
/// Holds the base URL, request timeout and authentication headers. Obtaining
/// the API key and access token is left to the caller.
///
/// # Examples
///
/// ```
/// use abode_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Default cloud endpoint
/// let config = HttpConfig::new();
/// assert_eq!(config.base_url(), "https://my.goabode.com");
///
/// // With all options
/// let config = HttpConfig::new()
///     .with_base_url("http://127.0.0.1:8080/")
///     .with_api_key("api-key")
///     .with_access_token("token")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Header carrying the session API key.
    pub const API_KEY_HEADER: &'static str = "ABODE-API-KEY";

    /// Creates a configuration targeting the Abode cloud.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: urls::BASE.to_string(),
            api_key: None,
            access_token: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom base URL. A trailing slash is removed.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the session API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the OAuth access token sent as a bearer token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API key if set.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the access token if set.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an HTTP(S) URL or the HTTP
    /// client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url: self.base_url,
            client,
            api_key: self.api_key,
            access_token: self.access_token,
        })
    }
}

// ============================================================================
// HttpClient - reqwest transport
// ============================================================================

/// HTTP transport for the Abode cloud API.
///
/// # Examples
///
/// ```no_run
/// use abode_lib::protocol::{HttpConfig, Method, Transport};
///
/// # async fn example() -> abode_lib::Result<()> {
/// let client = HttpConfig::new().with_api_key("api-key").into_client()?;
/// let response = client.send_request(Method::Get, "/api/v1/devices", None).await?;
/// println!("{}", response.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl HttpClient {
    /// Creates a client for the Abode cloud with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpConfig::new().into_client()
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for a path.
    ///
    /// Absolute URLs (as found in some device control URLs) are used as-is.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Transport for HttpClient {
    async fn send_request(
        &self,
        method: Method,
        path: &str,
        data: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        if let Some(api_key) = &self.api_key {
            request = request.header(HttpConfig::API_KEY_HEADER, api_key);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        if let Some(data) = data {
            request = request.json(data);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ProtocolError::AuthenticationFailed);
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        if !status.is_success() {
            return Err(ProtocolError::Status {
                code: status.as_u16(),
                body,
            });
        }

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
