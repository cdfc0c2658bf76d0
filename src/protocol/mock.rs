// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport for unit tests.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Method, Transport};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub data: Option<serde_json::Value>,
}

/// Transport that replays queued responses and records every request.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ProtocolError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a 200 response with the given JSON body.
    pub fn respond_json(&self, body: &serde_json::Value) {
        self.responses
            .lock()
            .push_back(Ok(ApiResponse::new(200, body.to_string())));
    }

    /// Queues a transport failure.
    pub fn respond_error(&self, error: ProtocolError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl Transport for MockTransport {
    async fn send_request(
        &self,
        method: Method,
        path: &str,
        data: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ProtocolError> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            data: data.cloned(),
        });
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(ProtocolError::Status {
                code: 404,
                body: format!("no response queued for {method} {path}"),
            })
        })
    }
}
