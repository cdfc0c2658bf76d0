// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Abode JSON responses.
//!
//! Each response type corresponds to one device command. Only the fields
//! the library validates are deserialized; anything else is ignored.

mod color;
mod status;

pub use color::{ColorResponse, ColorTemperatureResponse};
pub use status::{LevelResponse, StatusResponse};
