// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to the Abode cloud API.
//!
//! Devices never build HTTP requests themselves. They hand a method, a path
//! and an optional JSON body to a [`Transport`], which owns the session,
//! authentication headers and timeouts.
//!
//! - [`HttpClient`]: reqwest-based transport (feature `http`)

#[cfg(feature = "http")]
mod http;
#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use std::fmt;

use crate::error::{ParseError, ProtocolError};

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response from an Abode API request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parses the response body as JSON into the target type.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be parsed into the target type.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports that can send requests to the Abode API.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and returns the response.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The API path, relative to the transport's base URL
    /// * `data` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the server answers
    /// with a non-success status.
    async fn send_request(
        &self,
        method: Method,
        path: &str,
        data: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
    }

    #[test]
    fn response_json() {
        let response = ApiResponse::new(200, r#"{"id": "ZW:1"}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], "ZW:1");
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn response_json_invalid() {
        let response = ApiResponse::new(200, "not json");
        let result: Result<serde_json::Value, _> = response.json();
        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
