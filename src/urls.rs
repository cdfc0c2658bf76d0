// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abode API paths.
//!
//! Paths are relative to the configured base URL, see
//! [`HttpConfig`](crate::protocol::HttpConfig).

/// Default base URL of the Abode cloud.
pub const BASE: &str = "https://my.goabode.com";

/// List of all devices.
pub const DEVICES: &str = "/api/v1/devices";

/// Base path under which device integration actions are posted.
pub const INTEGRATIONS: &str = "/integrations/v1/devices/";

/// Returns the path of a single device.
#[must_use]
pub fn device(device_id: &str) -> String {
    format!("{DEVICES}/{}", urlencoding::encode(device_id))
}

/// Returns the integrations path of a device.
#[must_use]
pub fn integration(device_uuid: &str) -> String {
    format!("{INTEGRATIONS}{}", urlencoding::encode(device_uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_path_encodes_id() {
        assert_eq!(device("ZW:00000004"), "/api/v1/devices/ZW%3A00000004");
    }

    #[test]
    fn integration_path() {
        assert_eq!(
            integration("0123456789abcdef"),
            "/integrations/v1/devices/0123456789abcdef"
        );
    }
}
