// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Responses to the integrations color actions.
//!
//! Echoed values are kept as JSON numbers: the server may answer with a
//! float or with a value outside the range of the request type, and that
//! echo still wins over the request.

use serde::Deserialize;
use serde_json::Number;

use crate::types::HsColor;

fn number_eq(number: &Number, expected: f64) -> bool {
    number
        .as_f64()
        .is_some_and(|value| (value - expected).abs() < f64::EPSILON)
}

/// Response to a `setcolortemperature` action.
///
/// # Examples
///
/// ```
/// use abode_lib::response::ColorTemperatureResponse;
///
/// let json = r#"{"idForPanel": "ZW:00000006", "colorTemperature": 3000}"#;
/// let response: ColorTemperatureResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.device_id(), "ZW:00000006");
/// assert!(response.matches(3000));
/// assert!(!response.matches(3100));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ColorTemperatureResponse {
    #[serde(rename = "idForPanel")]
    id_for_panel: String,

    #[serde(rename = "colorTemperature")]
    color_temperature: Number,
}

impl ColorTemperatureResponse {
    /// Returns the device ID echoed by the server.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.id_for_panel
    }

    /// Returns the color temperature applied by the server.
    #[must_use]
    pub fn color_temperature(&self) -> &Number {
        &self.color_temperature
    }

    /// Returns `true` if the server applied the requested color temperature.
    #[must_use]
    pub fn matches(&self, requested: u32) -> bool {
        number_eq(&self.color_temperature, f64::from(requested))
    }
}

/// Response to a `setcolor` action.
///
/// # Examples
///
/// ```
/// use abode_lib::response::ColorResponse;
/// use abode_lib::types::HsColor;
///
/// let json = r#"{"idForPanel": "ZW:00000006", "hue": 201, "saturation": 50}"#;
/// let response: ColorResponse = serde_json::from_str(json).unwrap();
/// assert!(response.matches(HsColor::new(200, 50)));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ColorResponse {
    #[serde(rename = "idForPanel")]
    id_for_panel: String,

    hue: Number,

    saturation: Number,
}

impl ColorResponse {
    /// Returns the device ID echoed by the server.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.id_for_panel
    }

    /// Returns the hue applied by the server.
    #[must_use]
    pub fn hue(&self) -> &Number {
        &self.hue
    }

    /// Returns the saturation applied by the server.
    #[must_use]
    pub fn saturation(&self) -> &Number {
        &self.saturation
    }

    /// Returns `true` if the server applied the requested color.
    ///
    /// Hues may differ by at most [`HsColor::HUE_TOLERANCE`]; saturations
    /// must be equal.
    #[must_use]
    pub fn matches(&self, requested: HsColor) -> bool {
        let hue_close = self.hue.as_f64().is_some_and(|hue| {
            (hue - f64::from(requested.hue())).abs() <= f64::from(HsColor::HUE_TOLERANCE)
        });
        hue_close && number_eq(&self.saturation, f64::from(requested.saturation()))
    }
}
