// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abode device model.
//!
//! A [`Device`] wraps the JSON object the Abode API returns for a device
//! and a [`Transport`] used to send commands. The JSON object is the cache
//! of last-known values: it is refreshed by polling and patched by command
//! responses. Typed accessors read from it without any network I/O.
//!
//! Device handles are cheap to clone; clones share the same cached state.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use abode_lib::device::{Device, Light};
//! use abode_lib::protocol::HttpConfig;
//!
//! # async fn example() -> abode_lib::Result<()> {
//! let client = Arc::new(HttpConfig::new().with_api_key("api-key").into_client()?);
//! let json = serde_json::json!({
//!     "id": "ZW:00000006",
//!     "uuid": "0123456789abcdef",
//!     "type": "RGB Dimmer",
//!     "control_url": "api/v1/control/light/ZW:00000006",
//!     "statuses": {"level": "100", "hue": 120, "saturation": 50}
//! });
//!
//! let light = Light::new(Device::from_value(json, client)?);
//! light.set_color((200, 50)).await?;
//! # Ok(())
//! # }
//! ```

mod light;

pub use light::Light;

use std::fmt::Display;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::constants;
use crate::error::{DeviceError, Error, ParseError};
use crate::protocol::{ApiResponse, Method, Transport};
use crate::response::{LevelResponse, StatusResponse};
use crate::urls;

/// An Abode device backed by its API JSON object.
#[derive(Debug)]
pub struct Device<T: Transport> {
    device_id: String,
    client: Arc<T>,
    state: Arc<RwLock<Map<String, Value>>>,
}

impl<T: Transport> Clone for Device<T> {
    fn clone(&self) -> Self {
        Self {
            device_id: self.device_id.clone(),
            client: Arc::clone(&self.client),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Transport> Device<T> {
    /// Creates a device from its API JSON object.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the object has no string `id`.
    pub fn new(state: Map<String, Value>, client: Arc<T>) -> Result<Self, ParseError> {
        let device_id = state
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::MissingField("id".to_string()))?
            .to_string();

        Ok(Self {
            device_id,
            client,
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Creates a device from any JSON value.
    ///
    /// # Errors
    ///
    /// Returns error if the value is not an object or has no string `id`.
    pub fn from_value(value: Value, client: Arc<T>) -> Result<Self, ParseError> {
        match value {
            Value::Object(state) => Self::new(state, client),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected a device object, got: {other}"
            ))),
        }
    }

    /// Returns the transport used by this device.
    #[must_use]
    pub fn client(&self) -> &T {
        &self.client
    }

    /// Returns a copy of the cached JSON object.
    #[must_use]
    pub fn snapshot(&self) -> Map<String, Value> {
        self.state.read().clone()
    }

    // ========== Cached state ==========

    /// Returns the cached value for `name`, or an empty object if absent.
    ///
    /// The name is matched in lower case.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Value {
        self.state
            .read()
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Returns a single entry of the status mapping.
    #[must_use]
    pub fn status_value(&self, key: &str) -> Option<Value> {
        self.state
            .read()
            .get(constants::STATUSES_KEY)
            .and_then(|statuses| statuses.get(key))
            .cloned()
    }

    /// Updates the cached object from `json`.
    ///
    /// Only keys already present are updated; unknown keys are ignored.
    pub fn update(&self, json: &Map<String, Value>) {
        let mut state = self.state.write();
        for (key, value) in json {
            if let Some(slot) = state.get_mut(key) {
                *slot = value.clone();
            }
        }
    }

    /// Merges entries into the status mapping, creating it if needed.
    pub fn update_statuses(&self, entries: Map<String, Value>) {
        let mut state = self.state.write();
        let statuses = state
            .entry(constants::STATUSES_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !statuses.is_object() {
            *statuses = Value::Object(Map::new());
        }
        if let Value::Object(statuses) = statuses {
            statuses.extend(entries);
        }
    }

    fn set_field(&self, key: &str, value: Value) {
        self.state.write().insert(key.to_string(), value);
    }

    fn string_field(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    // ========== Identity ==========

    /// Returns the device ID.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the device UUID, used to address integration actions.
    #[must_use]
    pub fn device_uuid(&self) -> Option<String> {
        self.string_field("uuid")
    }

    /// Returns the device UUID, failing if the device JSON has none.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if `uuid` is absent or empty.
    pub fn require_device_uuid(&self) -> Result<String, ParseError> {
        self.device_uuid()
            .filter(|uuid| !uuid.is_empty())
            .ok_or_else(|| ParseError::MissingField("uuid".to_string()))
    }

    /// Returns the device name, falling back to `"<type> <id>"`.
    #[must_use]
    pub fn name(&self) -> String {
        self.string_field("name")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("{} {}", self.type_name(), self.device_id))
    }

    /// Returns the hardware subtype, e.g. `"RGB Dimmer"`.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.string_field("type").unwrap_or_default()
    }

    /// Returns the type tag, e.g. `"device_type.hue"`.
    #[must_use]
    pub fn type_tag(&self) -> Option<String> {
        self.string_field("type_tag")
    }

    /// Returns the generic type, e.g. `"light"`.
    #[must_use]
    pub fn generic_type(&self) -> Option<String> {
        self.string_field("generic_type")
    }

    /// Returns the generic status string, e.g. `"On"`.
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.string_field("status")
    }

    /// Returns a short description of the device.
    #[must_use]
    pub fn desc(&self) -> String {
        format!(
            "{} (ID: {}, UUID: {}) - {} - {}",
            self.name(),
            self.device_id,
            self.device_uuid().unwrap_or_default(),
            self.type_name(),
            self.status().unwrap_or_default()
        )
    }

    // ========== Faults ==========

    fn fault(&self, key: &str) -> bool {
        self.state
            .read()
            .get(constants::FAULTS_KEY)
            .and_then(|faults| faults.get(key))
            .is_some_and(|value| match value {
                Value::Bool(flag) => *flag,
                other => value_as_u64(other).is_some_and(|n| n != 0),
            })
    }

    /// Returns `true` if the battery is low.
    #[must_use]
    pub fn battery_low(&self) -> bool {
        self.fault("low_battery")
    }

    /// Returns `true` if the device is not responding.
    #[must_use]
    pub fn no_response(&self) -> bool {
        self.fault("no_response")
    }

    /// Returns `true` if the device is out of order.
    #[must_use]
    pub fn out_of_order(&self) -> bool {
        self.fault("out_of_order")
    }

    /// Returns `true` if the device has been tampered with.
    #[must_use]
    pub fn tampered(&self) -> bool {
        // The API spells it "tempered".
        self.fault("tempered")
    }

    // ========== Commands ==========

    /// Returns the control URL of the device, if known.
    #[must_use]
    pub fn control_url(&self) -> Option<String> {
        self.string_field("control_url").filter(|url| !url.is_empty())
    }

    /// Returns the control URL, failing if the device cannot be controlled.
    ///
    /// Every command calls this before building its request.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::MissingControlUrl` if no control URL is known.
    pub fn require_control_url(&self) -> Result<String, DeviceError> {
        self.control_url().ok_or(DeviceError::MissingControlUrl)
    }

    /// Fails if `actual` is not this device's ID.
    pub(crate) fn check_device_id(&self, actual: &str) -> Result<(), DeviceError> {
        if actual == self.device_id {
            Ok(())
        } else {
            Err(DeviceError::IdMismatch {
                expected: self.device_id.clone(),
                actual: actual.to_string(),
            })
        }
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        data: Option<&Value>,
    ) -> Result<ApiResponse, Error> {
        self.client
            .send_request(method, path, data)
            .await
            .map_err(Error::Protocol)
    }

    /// Sets the device status through its control URL.
    ///
    /// The server echoes the requested status rather than the new device
    /// status, so the cache is left untouched.
    ///
    /// # Errors
    ///
    /// Returns error if there is no control URL, the request fails, or the
    /// echoed ID or status does not match the request.
    pub async fn set_status(&self, status: impl Display) -> Result<(), Error> {
        let path = self.require_control_url()?;
        let status = status.to_string();
        let body = serde_json::json!({ "status": status });

        let response = self.send(Method::Put, &path, Some(&body)).await?;
        tracing::debug!(device_id = %self.device_id, body = %response.text(), "Set status response");

        let parsed: StatusResponse = response.json()?;
        self.check_device_id(parsed.device_id())?;
        if parsed.status() != status {
            return Err(DeviceError::StateMismatch {
                expected: status,
                actual: parsed.status().to_string(),
            }
            .into());
        }

        tracing::info!(device_id = %self.device_id, status = %status, "Set device status");
        Ok(())
    }

    /// Sets the device level through its control URL.
    ///
    /// # Errors
    ///
    /// Returns error if there is no control URL, the request fails, or the
    /// echoed ID or level does not match the request.
    pub async fn set_level(&self, level: impl Display) -> Result<(), Error> {
        let path = self.require_control_url()?;
        let level = level.to_string();
        let body = serde_json::json!({ "level": level });

        let response = self.send(Method::Put, &path, Some(&body)).await?;
        tracing::debug!(device_id = %self.device_id, body = %response.text(), "Set level response");

        let object: Map<String, Value> = response.json()?;
        let parsed: LevelResponse =
            serde_json::from_value(Value::Object(object.clone())).map_err(ParseError::Json)?;
        self.check_device_id(parsed.device_id())?;
        if parsed.level() != level {
            return Err(DeviceError::StateMismatch {
                expected: level,
                actual: parsed.level().to_string(),
            }
            .into());
        }

        self.update(&object);

        tracing::info!(device_id = %self.device_id, level = %level, "Set device level");
        Ok(())
    }

    /// Reloads the device JSON from the API.
    ///
    /// Only needed when no event subscription keeps the cache up to date.
    /// The API answers with either one object or a list of objects; each is
    /// applied with [`Device::update`] and returned.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an object or a
    /// list of objects.
    pub async fn refresh(&self) -> Result<Vec<Map<String, Value>>, Error> {
        let path = urls::device(&self.device_id);
        let response = self.send(Method::Get, &path, None).await?;
        tracing::debug!(device_id = %self.device_id, body = %response.text(), "Device refresh response");

        let objects = match response.json::<Value>()? {
            Value::Null => Vec::new(),
            Value::Object(object) => vec![object],
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(object) => Ok(object),
                    other => Err(ParseError::UnexpectedFormat(format!(
                        "expected a device object, got: {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(ParseError::UnexpectedFormat(format!(
                    "expected a device object or list, got: {other}"
                ))
                .into());
            }
        };

        for object in &objects {
            self.update(object);
        }

        Ok(objects)
    }
}

/// Reads a non-negative integer stored either as a JSON number (integral
/// floats included) or as a numeric string.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract().abs() < f64::EPSILON && (0.0..=f64::from(u32::MAX)).contains(n))
                .map(|n| n as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
