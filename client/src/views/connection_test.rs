use super::*;
use serde_json::json;

#[test]
fn absent_payload_yields_default() {
    assert_eq!(derive(None), ViewConfig::default());
}

#[test]
fn message_only_payload() {
    let payload = ConnectionCheck { message: "Hello".into(), ..ConnectionCheck::default() };
    let view = derive(Some(&payload));
    assert_eq!(view.title, TITLE);
    assert_eq!(view.message.as_deref(), Some("Hello"));
    assert!(view.details.is_empty());
    assert!(view.chart.is_none());
}

#[test]
fn status_and_object_data_become_details() {
    let payload = ConnectionCheck {
        status: Some("success".into()),
        message: "Frontend and backend are connected!".into(),
        data: Some(json!({ "number": 42, "text": "Hello World" })),
    };
    let view = derive(Some(&payload));
    let rows: Vec<(&str, &str)> = view.details.iter().map(|d| (d.label.as_str(), d.value.as_str())).collect();
    assert_eq!(rows, vec![("Status", "success"), ("number", "42"), ("text", "Hello World")]);
}

#[test]
fn scalar_data_is_labelled_data() {
    let payload = ConnectionCheck { message: "m".into(), data: Some(json!([1, 2])), ..ConnectionCheck::default() };
    let view = derive(Some(&payload));
    assert_eq!(view.details, vec![Detail { label: "Data".into(), value: "[1,2]".into() }]);
}
