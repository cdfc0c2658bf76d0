// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light capabilities derived from the device subtype.
//!
//! Abode reports the hardware subtype as a free-form string such as
//! `"RGB Dimmer"` or `"Dimmer"`. Capabilities are detected by substring.

/// Capabilities of an Abode light.
///
/// # Examples
///
/// ```
/// use abode_lib::Capabilities;
///
/// let caps = Capabilities::from_type_name("RGB Dimmer");
/// assert!(caps.rgb);
/// assert!(caps.dimmer);
///
/// let plain = Capabilities::from_type_name("Light Bulb");
/// assert_eq!(plain, Capabilities::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Supports hue/saturation color control.
    pub rgb: bool,

    /// Supports brightness control.
    pub dimmer: bool,
}

impl Capabilities {
    /// Subtype marker of color-capable lights.
    pub const RGB_MARKER: &'static str = "RGB";

    /// Subtype marker of dimmable lights.
    pub const DIMMER_MARKER: &'static str = "Dimmer";

    /// Detects capabilities from a device subtype string.
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Self {
        Self {
            rgb: type_name.contains(Self::RGB_MARKER),
            dimmer: type_name.contains(Self::DIMMER_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_dimmer() {
        let caps = Capabilities::from_type_name("RGB Dimmer");
        assert!(caps.rgb);
        assert!(caps.dimmer);
    }

    #[test]
    fn dimmer_only() {
        let caps = Capabilities::from_type_name("Dimmer");
        assert!(!caps.rgb);
        assert!(caps.dimmer);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let caps = Capabilities::from_type_name("rgb dimmer");
        assert!(!caps.rgb);
        assert!(!caps.dimmer);
    }

    #[test]
    fn empty_type_name() {
        assert_eq!(Capabilities::from_type_name(""), Capabilities::default());
    }
}
