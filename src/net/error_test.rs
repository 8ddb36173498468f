use super::*;

#[test]
fn unreachable_names_the_underlying_failure() {
    let err = TransportError::Unreachable("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn status_names_the_http_code() {
    assert_eq!(TransportError::Status(503).to_string(), "unexpected status: 503");
}

#[test]
fn malformed_names_the_decode_failure() {
    let err = TransportError::Malformed("missing field `queue`".to_owned());
    assert_eq!(err.to_string(), "malformed response: missing field `queue`");
}

#[test]
fn unavailable_is_the_server_side_stub() {
    assert_eq!(TransportError::Unavailable.to_string(), "not available on server");
}
