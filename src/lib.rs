// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `abode_lib` - A Rust library to control Abode smart lights.
//!
//! This library provides async APIs to drive lights attached to an Abode
//! security system through the Abode cloud REST API.
//!
//! # Supported Features
//!
//! - **Light control**: color temperature, hue/saturation color, on/off, level
//! - **Cached state**: brightness, color, color mode read from the last known
//!   device JSON without network I/O
//! - **Capabilities**: color and dimming support detected from the device subtype
//!
//! # Server-side Reconciliation
//!
//! The Abode API echoes the value it actually applied. When that value differs
//! from the request, the library logs a warning and caches the server's value.
//! Only a response for another device is treated as an error.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use abode_lib::{Device, HttpConfig, Light};
//!
//! #[tokio::main]
//! async fn main() -> abode_lib::Result<()> {
//!     let client = Arc::new(
//!         HttpConfig::new()
//!             .with_api_key("api-key")
//!             .with_access_token("access-token")
//!             .into_client()?,
//!     );
//!
//!     let json = serde_json::json!({
//!         "id": "ZW:00000006",
//!         "uuid": "0123456789abcdef",
//!         "type": "RGB Dimmer",
//!         "control_url": "api/v1/control/light/ZW:00000006",
//!         "statuses": {}
//!     });
//!     let light = Light::new(Device::from_value(json, client)?);
//!
//!     if light.is_color_capable() {
//!         light.set_color((200, 50)).await?;
//!     }
//!     light.set_color_temp(3000).await?;
//!
//!     println!("color: {:?}", light.color());
//!     Ok(())
//! }
//! ```

mod capabilities;
pub mod constants;
pub mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;
pub mod urls;

pub use capabilities::Capabilities;
pub use device::{Device, Light};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{ApiResponse, Method, Transport};
pub use types::HsColor;
