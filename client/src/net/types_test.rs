use super::*;
use serde_json::json;

#[test]
fn sales_data_decodes_nested_series() {
    let payload: SalesData = serde_json::from_value(json!({
        "categories": ["Electronics", "Clothing"],
        "regions": ["North", "South"],
        "series": [
            { "name": "Electronics", "data": [120, 200] },
            { "name": "Clothing", "data": [80.5, 60] }
        ]
    }))
    .unwrap();
    assert_eq!(payload.regions, vec!["North", "South"]);
    assert_eq!(payload.series[1].name, "Clothing");
    assert_eq!(payload.series[1].data, vec![80.5, 60.0]);
}

#[test]
fn missing_arrays_default_to_empty() {
    let payload: SalesTrend = serde_json::from_value(json!({ "dates": ["2024-01-01"] })).unwrap();
    assert_eq!(payload.dates.len(), 1);
    assert!(payload.sales.is_empty());
    assert!(payload.orders.is_empty());
}

#[test]
fn connection_check_accepts_minimal_and_full_shapes() {
    let minimal: ConnectionCheck = serde_json::from_value(json!({ "message": "hi" })).unwrap();
    assert_eq!(minimal.status, None);
    assert_eq!(minimal.data, None);

    let full: ConnectionCheck = serde_json::from_value(json!({
        "status": "success",
        "message": "Frontend and backend are connected!",
        "data": { "number": 42, "text": "Hello World" }
    }))
    .unwrap();
    assert_eq!(full.status.as_deref(), Some("success"));
    assert_eq!(full.data, Some(json!({ "number": 42, "text": "Hello World" })));
}

#[test]
fn connection_check_requires_message() {
    assert!(serde_json::from_value::<ConnectionCheck>(json!({ "status": "ok" })).is_err());
}

#[test]
fn post_message_body_uses_camel_case_key() {
    let body = PostMessageBody { body_param: "B".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "bodyParam": "B" }));
}
