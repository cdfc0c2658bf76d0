// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.

use std::fmt;

/// A hue/saturation color as accepted by the Abode `setcolor` action.
///
/// Values are passed to the server as-is; the server is the authority on
/// which values it actually applies.
///
/// # Examples
///
/// ```
/// use abode_lib::types::HsColor;
///
/// let teal = HsColor::new(180, 100);
/// assert_eq!(teal.hue(), 180);
/// assert_eq!(teal.saturation(), 100);
///
/// let same: HsColor = (180, 100).into();
/// assert_eq!(teal, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HsColor {
    hue: u16,
    saturation: u8,
}

impl HsColor {
    /// Largest hue difference the server may introduce by rounding.
    pub const HUE_TOLERANCE: u16 = 1;

    /// Creates a new hue/saturation color.
    #[must_use]
    pub const fn new(hue: u16, saturation: u8) -> Self {
        Self { hue, saturation }
    }

    /// Returns the hue.
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation.
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }
}

impl From<(u16, u8)> for HsColor {
    fn from((hue, saturation): (u16, u8)) -> Self {
        Self::new(hue, saturation)
    }
}

impl From<HsColor> for (u16, u8) {
    fn from(color: HsColor) -> Self {
        (color.hue, color.saturation)
    }
}

impl fmt::Display for HsColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.hue, self.saturation)
    }
}
