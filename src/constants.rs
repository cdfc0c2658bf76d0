// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keys and sentinel values used in Abode device JSON.

/// Key of the per-device status mapping.
pub const STATUSES_KEY: &str = "statuses";

/// Key of the per-device fault flags.
pub const FAULTS_KEY: &str = "faults";

/// Status mapping key holding the brightness level.
pub const LEVEL_KEY: &str = "level";

/// Status mapping key holding the color temperature.
pub const COLOR_TEMP_KEY: &str = "color_temp";

/// Status mapping key holding the hue.
pub const HUE_KEY: &str = "hue";

/// Status mapping key holding the saturation.
pub const SATURATION_KEY: &str = "saturation";

/// Status mapping key holding the active color mode.
pub const COLOR_MODE_KEY: &str = "color_mode";

/// Color mode value reported while the light is in color mode.
pub const COLOR_MODE_ON: u8 = 0;

/// Color mode value reported while the light is in white mode.
pub const COLOR_MODE_OFF: u8 = 2;

/// Status string of a device that is on.
pub const STATUS_ON: &str = "On";

/// Status string of a device that is off.
pub const STATUS_OFF: &str = "Off";

/// Status string of a device that is online.
pub const STATUS_ONLINE: &str = "Online";

/// Status string of a device that does not respond.
pub const STATUS_OFFLINE: &str = "Offline";

/// Status value sent to switch a device on.
pub const STATUS_ON_INT: u8 = 1;

/// Status value sent to switch a device off.
pub const STATUS_OFF_INT: u8 = 0;

/// Generic type of light devices.
pub const TYPE_LIGHT: &str = "light";

/// Type tag of a dimmer device.
pub const DEVICE_DIMMER: &str = "device_type.dimmer";
