use super::*;
use crate::net::test_support::{Call, RecordingClient};
use crate::panels::PanelKind;
use futures::executor::block_on;
use serde_json::json;

fn config() -> ApiConfig {
    ApiConfig::new("http://backend:5000/api")
}

#[test]
fn get_message_url_encodes_reserved_characters() {
    assert_eq!(
        get_message_url(&config(), "a b&c=d/é"),
        "http://backend:5000/api/get_message?param=a%20b%26c%3Dd%2F%C3%A9"
    );
}

#[test]
fn get_message_url_decodes_back_to_input() {
    let input = "50% off? #deal +more";
    let url = get_message_url(&config(), input);
    let (_, encoded) = url.split_once("?param=").unwrap();
    assert_eq!(urlencoding::decode(encoded).unwrap(), input);
}

#[test]
fn post_message_url_carries_param() {
    assert_eq!(post_message_url(&config(), "U"), "http://backend:5000/api/post_message?param=U");
}

#[test]
fn fetch_panel_requests_panel_endpoint() {
    let client = RecordingClient::with_responses(vec![Ok(json!({
        "dates": ["2024-01-01"], "sales": [10], "orders": [1]
    }))]);
    let payload = block_on(fetch_panel(&client, &config(), PanelKind::SalesTrend)).unwrap();
    assert!(matches!(payload, PanelPayload::SalesTrend(_)));
    assert_eq!(
        client.calls(),
        vec![Call::Get("http://backend:5000/api/sales-trend".to_owned())]
    );
}

#[test]
fn fetch_panel_propagates_transport_error() {
    let client = RecordingClient::with_responses(vec![Err(ApiError::Server(500))]);
    let err = block_on(fetch_panel(&client, &config(), PanelKind::ProductRanking)).unwrap_err();
    assert_eq!(err, ApiError::Server(500));
}

#[test]
fn fetch_panel_rejects_wrong_shape() {
    let client = RecordingClient::with_responses(vec![Ok(json!({ "products": "not-a-list" }))]);
    let err = block_on(fetch_panel(&client, &config(), PanelKind::ProductRanking)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn send_get_message_returns_message_field() {
    let client = RecordingClient::with_responses(vec![Ok(json!({ "message": "got X" }))]);
    let message = block_on(send_get_message(&client, &config(), "X")).unwrap();
    assert_eq!(message, "got X");
    assert_eq!(
        client.calls(),
        vec![Call::Get("http://backend:5000/api/get_message?param=X".to_owned())]
    );
}

#[test]
fn send_post_message_sends_body_and_query() {
    let client = RecordingClient::with_responses(vec![Ok(json!({ "message": "posted" }))]);
    let message = block_on(send_post_message(&client, &config(), "B", "U")).unwrap();
    assert_eq!(message, "posted");
    assert_eq!(
        client.calls(),
        vec![Call::Post(
            "http://backend:5000/api/post_message?param=U".to_owned(),
            json!({ "bodyParam": "B" })
        )]
    );
}

#[test]
fn send_get_message_without_message_field_is_decode_error() {
    let client = RecordingClient::with_responses(vec![Ok(json!({ "status": "ok" }))]);
    let err = block_on(send_get_message(&client, &config(), "X")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
