// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and lights using wiremock.

use std::sync::Arc;

use abode_lib::protocol::{HttpClient, HttpConfig, Method, Transport};
use abode_lib::{Device, DeviceError, Error, Light, ParseError, ProtocolError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEVICE_ID: &str = "ZW:00000006";
const DEVICE_UUID: &str = "0123456789abcdef";

fn client_for(server: &MockServer) -> Arc<HttpClient> {
    Arc::new(
        HttpConfig::new()
            .with_base_url(server.uri())
            .with_api_key("test-key")
            .with_access_token("test-token")
            .into_client()
            .unwrap(),
    )
}

fn light_json() -> serde_json::Value {
    json!({
        "id": DEVICE_ID,
        "uuid": DEVICE_UUID,
        "name": "Living Room",
        "type": "RGB Dimmer",
        "type_tag": "device_type.hue",
        "generic_type": "light",
        "status": "On",
        "control_url": "api/v1/control/light/ZW:00000006",
        "faults": {"low_battery": "0", "no_response": "0"},
        "statuses": {
            "level": "100",
            "color_temp": 2700,
            "hue": 120,
            "saturation": 40,
            "color_mode": "0"
        }
    })
}

fn light_for(server: &MockServer) -> Light<HttpClient> {
    Light::new(Device::from_value(light_json(), client_for(server)).unwrap())
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn sends_auth_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/devices"))
            .and(header("ABODE-API-KEY", "test-key"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .send_request(Method::Get, "/api/v1/devices", None)
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.text(), "[]");
    }

    #[tokio::test]
    async fn unauthorized_is_authentication_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.send_request(Method::Get, "/api/v1/devices", None).await;

        assert!(matches!(result, Err(ProtocolError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500).set_body_string("panel offline"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .send_request(Method::Put, "api/v1/control/light/ZW:1", Some(&json!({})))
            .await;

        match result {
            Err(ProtocolError::Status { code, body }) => {
                assert_eq!(code, 500);
                assert_eq!(body, "panel offline");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

// ============================================================================
// Light Tests
// ============================================================================

mod light {
    use super::*;

    #[tokio::test]
    async fn set_color_temp_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/integrations/v1/devices/0123456789abcdef"))
            .and(body_json(json!({
                "action": "setcolortemperature",
                "colorTemperature": 4000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "idForPanel": DEVICE_ID,
                "colorTemperature": 4000
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        light.set_color_temp(4000).await.unwrap();

        assert_eq!(light.color_temp(), Some(4000));
        assert_eq!(light.brightness(), Some(100));
    }

    #[tokio::test]
    async fn set_color_temp_caches_server_value() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/integrations/v1/devices/0123456789abcdef"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "idForPanel": DEVICE_ID,
                "colorTemperature": 6500
            })))
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        light.set_color_temp(7000).await.unwrap();

        assert_eq!(light.color_temp(), Some(6500));
    }

    #[tokio::test]
    async fn set_color_within_tolerance_keeps_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({"action": "setcolor", "hue": 200, "saturation": 50})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "idForPanel": DEVICE_ID,
                "hue": 201,
                "saturation": 50
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        light.set_color((200, 50)).await.unwrap();

        assert_eq!(light.color(), (Some(200), Some(50)));
    }

    #[tokio::test]
    async fn set_color_outside_tolerance_caches_server_value() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "idForPanel": DEVICE_ID,
                "hue": 203,
                "saturation": 50
            })))
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        light.set_color((200, 50)).await.unwrap();

        assert_eq!(light.color(), (Some(203), Some(50)));
    }

    #[tokio::test]
    async fn id_mismatch_leaves_cache_untouched() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "idForPanel": "ZW:00000099",
                "hue": 10,
                "saturation": 10
            })))
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        let err = light.set_color((10, 10)).await.unwrap_err();

        match err {
            Error::Device(device_err @ DeviceError::IdMismatch { .. }) => {
                assert_eq!(device_err.code(), 12);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(light.color(), (Some(120), Some(40)));
    }

    #[tokio::test]
    async fn missing_control_url_sends_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut json = light_json();
        json.as_object_mut().unwrap().remove("control_url");
        let light = Light::new(Device::from_value(json, client_for(&mock_server)).unwrap());

        let err = light.set_color_temp(3000).await.unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::MissingControlUrl)));

        let err = light.set_color((1, 2)).await.unwrap_err();
        assert!(matches!(err, Error::Device(DeviceError::MissingControlUrl)));
    }

    #[tokio::test]
    async fn missing_uuid_sends_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut json = light_json();
        json.as_object_mut().unwrap().remove("uuid");
        let light = Light::new(Device::from_value(json, client_for(&mock_server)).unwrap());

        let err = light.set_color_temp(3000).await.unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(_))));
        assert_eq!(light.color_temp(), Some(2700));
    }

    #[tokio::test]
    async fn float_echo_is_reconciled() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "idForPanel": DEVICE_ID,
                "hue": 200.0,
                "saturation": 50
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        light.set_color((200, 50)).await.unwrap();

        assert_eq!(light.color(), (Some(200), Some(50)));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        let err = light.set_color_temp(3000).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::Status { code: 503, .. })
        ));
        assert_eq!(light.color_temp(), Some(2700));
    }

    #[tokio::test]
    async fn switch_off_puts_status_to_control_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/control/light/ZW:00000006"))
            .and(body_json(json!({"status": "0"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": DEVICE_ID,
                "status": "0"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        assert!(light.is_on());
        light.switch_off().await.unwrap();
        assert!(!light.is_on());
    }

    #[tokio::test]
    async fn refresh_replaces_statuses() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/api/v1/devices/ZW"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": DEVICE_ID,
                "status": "Off",
                "statuses": {"level": "10", "color_mode": "2"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let light = light_for(&mock_server);
        light.device().refresh().await.unwrap();

        assert_eq!(light.brightness(), Some(10));
        assert!(!light.has_color());
        assert!(!light.is_on());
    }

    #[test]
    fn derived_properties() {
        let mock_server_uri = "http://127.0.0.1:1";
        let client = Arc::new(
            HttpConfig::new()
                .with_base_url(mock_server_uri)
                .into_client()
                .unwrap(),
        );
        let light = Light::new(Device::from_value(light_json(), client).unwrap());

        assert!(light.is_color_capable());
        assert!(light.is_dimmable());
        assert!(light.has_brightness());
        assert!(light.has_color());
        assert_eq!(light.device().name(), "Living Room");
        assert!(!light.device().battery_low());
    }
}
