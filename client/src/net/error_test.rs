use super::*;

#[test]
fn server_error_formats_status() {
    assert_eq!(ApiError::Server(503).to_string(), "server returned status 503");
}

#[test]
fn network_error_keeps_detail() {
    assert_eq!(ApiError::Network("connection refused".into()).to_string(), "network error: connection refused");
}

#[test]
fn serde_errors_become_decode_errors() {
    let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
    assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
}
