// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `abode_lib` library.
//!
//! Failures are split by layer: transport errors from the HTTP client,
//! JSON parsing errors, and device-level errors raised while validating a
//! command or its response.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to HTTP communication with the Abode cloud.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {code}: {body}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, as returned by the server.
        body: String,
    },

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing Abode responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to device operations.
///
/// Every variant carries a fixed numeric code, see [`DeviceError::code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device has no control URL, so it cannot receive commands.
    #[error("control URL does not exist in device JSON")]
    MissingControlUrl,

    /// The response refers to a different device than the one targeted.
    #[error("device response ID {actual:?} does not match request ID {expected:?}")]
    IdMismatch {
        /// The ID of the device the command was sent to.
        expected: String,
        /// The ID echoed back by the server.
        actual: String,
    },

    /// The server echoed a status or level other than the one requested.
    #[error("device value {actual:?} does not match requested value {expected:?}")]
    StateMismatch {
        /// The requested value.
        expected: String,
        /// The value echoed back by the server.
        actual: String,
    },
}

impl DeviceError {
    /// Returns the fixed error code for this error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::MissingControlUrl => 11,
            Self::IdMismatch { .. } => 12,
            Self::StateMismatch { .. } => 13,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
