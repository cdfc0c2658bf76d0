// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Responses to control URL status and level updates.

use serde::{Deserialize, Deserializer};

/// Response to a status update on a device's control URL.
///
/// The `status` field is the echoed request, not the new device status.
///
/// # Examples
///
/// ```
/// use abode_lib::response::StatusResponse;
///
/// let json = r#"{"id": "ZW:00000004", "status": "1"}"#;
/// let response: StatusResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.device_id(), "ZW:00000004");
/// assert_eq!(response.status(), "1");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    id: String,

    #[serde(deserialize_with = "string_or_number")]
    status: String,
}

impl StatusResponse {
    /// Returns the device ID echoed by the server.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.id
    }

    /// Returns the status echoed by the server.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Response to a level update on a device's control URL.
///
/// # Examples
///
/// ```
/// use abode_lib::response::LevelResponse;
///
/// let json = r#"{"id": "ZW:00000004", "level": 75}"#;
/// let response: LevelResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.level(), "75");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LevelResponse {
    id: String,

    #[serde(deserialize_with = "string_or_number")]
    level: String,
}

impl LevelResponse {
    /// Returns the device ID echoed by the server.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.id
    }

    /// Returns the level echoed by the server.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }
}

// Abode echoes these values either as strings or as bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_as_number() {
        let json = r#"{"id": "ZW:1", "status": 0}"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status(), "0");
    }

    #[test]
    fn level_as_string() {
        let json = r#"{"id": "ZW:1", "level": "42"}"#;
        let response: LevelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.level(), "42");
    }

    #[test]
    fn level_rejects_object() {
        let json = r#"{"id": "ZW:1", "level": {}}"#;
        let result: Result<LevelResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
