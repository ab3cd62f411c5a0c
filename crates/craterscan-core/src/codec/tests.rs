//! Tests for the image transport codec

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::*;

#[test]
fn test_encode_round_trip_preserves_content() {
    // Not a real JPEG, but round-tripping is format agnostic
    let blob: Vec<u8> = (0u8..=255).cycle().take(1024).collect();

    let payload = encode(&blob);
    let decoded = STANDARD
        .decode(payload.as_str())
        .expect("encoder must emit valid base64");

    assert_eq!(decoded, blob);
}

#[test]
fn test_encode_empty_blob() {
    assert_eq!(encode(&[]).as_str(), "");
}

#[test]
fn test_strip_data_uri_prefix_removes_scheme() {
    let uri = "data:image/png;base64,iVBORw0KGgo=";
    assert_eq!(strip_data_uri_prefix(uri), "iVBORw0KGgo=");
}

#[test]
fn test_strip_data_uri_prefix_passes_raw_base64_through() {
    assert_eq!(strip_data_uri_prefix("QQ=="), "QQ==");
}

#[test]
fn test_strip_data_uri_prefix_ignores_commas_in_plain_text() {
    // A comma without a data: scheme is not a prefix boundary
    assert_eq!(strip_data_uri_prefix("abc,def"), "abc,def");
}

#[test]
fn test_to_data_uri_wraps_payload() {
    assert_eq!(to_data_uri("QQ=="), "data:image/jpeg;base64,QQ==");
}

#[test]
fn test_to_data_uri_accepts_empty_body() {
    // An omitted annotated image degrades to an empty handle that will
    // simply fail to render
    assert_eq!(to_data_uri(""), "data:image/jpeg;base64,");
}
