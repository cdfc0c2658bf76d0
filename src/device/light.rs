// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abode lights (dimmers and color bulbs).

use serde_json::{Map, Value};

use crate::capabilities::Capabilities;
use crate::constants;
use crate::device::{Device, value_as_u64};
use crate::error::Error;
use crate::protocol::{Method, Transport};
use crate::response::{ColorResponse, ColorTemperatureResponse};
use crate::types::HsColor;
use crate::urls;

/// An Abode light.
///
/// Color and color temperature changes go through the integrations
/// endpoint. The server may apply a different value than the one requested;
/// in that case the server's value is cached and a warning is logged.
#[derive(Debug)]
pub struct Light<T: Transport> {
    device: Device<T>,
}

impl<T: Transport> Clone for Light<T> {
    fn clone(&self) -> Self {
        Self {
            device: self.device.clone(),
        }
    }
}

impl<T: Transport> Light<T> {
    /// Wraps a device as a light.
    #[must_use]
    pub fn new(device: Device<T>) -> Self {
        Self { device }
    }

    /// Returns the underlying device.
    #[must_use]
    pub fn device(&self) -> &Device<T> {
        &self.device
    }

    /// Returns the device ID.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.device.device_id()
    }

    fn integration_path(&self) -> Result<String, Error> {
        self.device.require_control_url()?;
        let uuid = self.device.require_device_uuid()?;
        Ok(urls::integration(&uuid))
    }

    // ========== Color ==========

    /// Sets the color temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the device has no control URL or UUID, the request
    /// fails, or the response is for another device. A different color
    /// temperature in the response is not an error.
    pub async fn set_color_temp(&self, color_temp: u32) -> Result<(), Error> {
        let path = self.integration_path()?;
        let body = serde_json::json!({
            "action": "setcolortemperature",
            "colorTemperature": color_temp,
        });

        let response = self.device.send(Method::Post, &path, Some(&body)).await?;
        tracing::debug!(device_id = %self.device_id(), body = %response.text(), "Set color temp response");

        let parsed: ColorTemperatureResponse = response.json()?;
        self.device.check_device_id(parsed.device_id())?;

        let mut cached = Value::from(color_temp);
        if !parsed.matches(color_temp) {
            tracing::warn!(
                device_id = %self.device_id(),
                requested = color_temp,
                returned = %parsed.color_temperature(),
                "Set color temp mismatch"
            );
            cached = Value::Number(parsed.color_temperature().clone());
        }

        let mut entries = Map::new();
        entries.insert(constants::COLOR_TEMP_KEY.to_string(), cached.clone());
        self.device.update_statuses(entries);

        tracing::info!(
            device_id = %self.device_id(),
            color_temp = %cached,
            "Set device color temp"
        );
        Ok(())
    }

    /// Sets the hue and saturation.
    ///
    /// The server sometimes rounds the hue by one, which is accepted. Any
    /// larger hue difference or a different saturation replaces both
    /// cached values with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the device has no control URL or UUID, the request
    /// fails, or the response is for another device.
    pub async fn set_color(&self, color: impl Into<HsColor>) -> Result<(), Error> {
        let path = self.integration_path()?;
        let color = color.into();
        let body = serde_json::json!({
            "action": "setcolor",
            "hue": color.hue(),
            "saturation": color.saturation(),
        });

        let response = self.device.send(Method::Post, &path, Some(&body)).await?;
        tracing::debug!(device_id = %self.device_id(), body = %response.text(), "Set color response");

        let parsed: ColorResponse = response.json()?;
        self.device.check_device_id(parsed.device_id())?;

        let mut hue = Value::from(color.hue());
        let mut saturation = Value::from(color.saturation());
        if !parsed.matches(color) {
            tracing::warn!(
                device_id = %self.device_id(),
                requested = %color,
                returned_hue = %parsed.hue(),
                returned_saturation = %parsed.saturation(),
                "Set color mismatch"
            );
            hue = Value::Number(parsed.hue().clone());
            saturation = Value::Number(parsed.saturation().clone());
        }

        let mut entries = Map::new();
        entries.insert(constants::HUE_KEY.to_string(), hue.clone());
        entries.insert(constants::SATURATION_KEY.to_string(), saturation.clone());
        self.device.update_statuses(entries);

        tracing::info!(
            device_id = %self.device_id(),
            hue = %hue,
            saturation = %saturation,
            "Set device color"
        );
        Ok(())
    }

    // ========== Cached values ==========

    fn status_number<N: TryFrom<u64>>(&self, key: &str) -> Option<N> {
        self.device
            .status_value(key)
            .as_ref()
            .and_then(value_as_u64)
            .and_then(|n| N::try_from(n).ok())
    }

    /// Returns the cached brightness level.
    #[must_use]
    pub fn brightness(&self) -> Option<u8> {
        self.status_number(constants::LEVEL_KEY)
    }

    /// Returns the cached color temperature.
    #[must_use]
    pub fn color_temp(&self) -> Option<u32> {
        self.status_number(constants::COLOR_TEMP_KEY)
    }

    /// Returns the cached `(hue, saturation)`.
    #[must_use]
    pub fn color(&self) -> (Option<u16>, Option<u8>) {
        (
            self.status_number(constants::HUE_KEY),
            self.status_number(constants::SATURATION_KEY),
        )
    }

    /// Returns `true` if a non-zero brightness is cached.
    #[must_use]
    pub fn has_brightness(&self) -> bool {
        self.brightness().is_some_and(|level| level != 0)
    }

    /// Returns `true` if the light is in color mode.
    ///
    /// The color mode is reported as a string; a numeric value never
    /// counts as color mode.
    #[must_use]
    pub fn has_color(&self) -> bool {
        matches!(
            self.device.status_value(constants::COLOR_MODE_KEY),
            Some(Value::String(mode)) if mode == constants::COLOR_MODE_ON.to_string()
        )
    }

    // ========== Capabilities ==========

    /// Returns the capabilities derived from the device subtype.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_type_name(&self.device.type_name())
    }

    /// Returns `true` if the light supports color.
    #[must_use]
    pub fn is_color_capable(&self) -> bool {
        self.capabilities().rgb
    }

    /// Returns `true` if the light is dimmable.
    #[must_use]
    pub fn is_dimmable(&self) -> bool {
        self.capabilities().dimmer
    }

    // ========== Switch ==========

    /// Turns the light on.
    ///
    /// # Errors
    ///
    /// Returns error if the status update fails.
    pub async fn switch_on(&self) -> Result<(), Error> {
        self.device.set_status(constants::STATUS_ON_INT).await?;
        self.device.set_field("status", Value::from(constants::STATUS_ON));
        Ok(())
    }

    /// Turns the light off.
    ///
    /// # Errors
    ///
    /// Returns error if the status update fails.
    pub async fn switch_off(&self) -> Result<(), Error> {
        self.device.set_status(constants::STATUS_OFF_INT).await?;
        self.device.set_field("status", Value::from(constants::STATUS_OFF));
        Ok(())
    }

    /// Returns `true` unless the light is off or offline.
    #[must_use]
    pub fn is_on(&self) -> bool {
        !matches!(
            self.device.status().as_deref(),
            Some(constants::STATUS_OFF | constants::STATUS_OFFLINE)
        )
    }
}
