#![allow(clippy::disallowed_methods)] // unwrap() is acceptable in tests

use super::convert::{MAX_ERROR_MESSAGE_LEN, truncate_message};
use super::*;

#[test]
fn test_api_error_display_matches_envelope() {
    let err = ApiError::new("NOT_FOUND", "Domain example.com not found");
    assert_eq!(
        err.to_string(),
        r#"Error NOT_FOUND: "Domain example.com not found""#
    );
}

#[test]
fn test_api_error_deserializes_field_details() {
    let body = r#"{
        "code": "INVALID_BODY",
        "message": "Request body doesn't fulfill schema",
        "fields": [
            {"code": "UNEXPECTED_TYPE", "message": "is not a number", "path": "records[0].ttl", "pathRelated": "records[0]"}
        ]
    }"#;
    let err: ApiError = serde_json::from_str(body).unwrap();

    assert_eq!(err.code, "INVALID_BODY");
    assert_eq!(err.fields.len(), 1);
    assert_eq!(err.fields[0].path, "records[0].ttl");
    assert_eq!(err.fields[0].path_related, "records[0]");
    assert!(!err.is_quota_exceeded());
}

#[test]
fn test_api_error_json_skips_empty_parts() {
    let err = ApiError::new(ERR_CODE_QUOTA_EXCEEDED, "");
    assert_eq!(err.to_json(), r#"{"code":"QUOTA_EXCEEDED"}"#);
}

#[test]
fn test_status_pseudo_code() {
    assert_eq!(ApiError::status_code(404), "HTTPStatus: 404");
}

#[test]
fn test_quota_exceeded_penetrates_context() {
    let err = Error::api(ERR_CODE_QUOTA_EXCEEDED, "limit hit").context("validating client");
    assert!(err.is_quota_exceeded());
    assert_eq!(err.as_api().unwrap().message, "limit hit");

    let other = Error::api("UNABLE_TO_AUTHENTICATE", "bad key");
    assert!(!other.is_quota_exceeded());
}

#[test]
fn test_error_classes_are_distinct() {
    let parse = Error::from(ParseError::ErrorEnvelope {
        status: 502,
        source: serde_json::from_str::<ApiError>("not json").unwrap_err(),
    });
    assert!(parse.is_parse());
    assert!(matches!(&parse, Error::Parse(p) if p.status() == 502));
    assert!(parse.as_api().is_none());

    let cancelled = Error::cancelled("caller gave up");
    assert_eq!(cancelled.as_cancelled(), Some("caller gave up"));
    assert!(cancelled.as_timeout().is_none());

    let timeout = Error::timeout("deadline passed");
    assert_eq!(timeout.as_timeout(), Some("deadline passed"));

    let network = Error::from(NetworkError::Timeout);
    assert!(matches!(network.as_network(), Some(NetworkError::Timeout)));
}

#[test]
fn test_report_includes_chain() {
    let err = Error::network("Connection refused").context("Failed to list domains");
    let report = err.report();
    assert!(report.starts_with("Failed to list domains"));
    assert!(report.contains("Caused by: Network error: Connection failed: Connection refused"));
}

#[test]
fn test_root_cause_skips_context_layers() {
    let err = Error::invalid_request("bad body")
        .context("layer 1")
        .context("layer 2");
    assert!(matches!(err.root_cause(), Error::InvalidRequest(_)));
}

#[test]
fn test_config_error_converts() {
    let err: Error = ConfigValidationError::missing("api_key").into();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_truncate_message() {
    let short = truncate_message("short".to_string());
    assert_eq!(short, "short");

    let long = truncate_message("é".repeat(MAX_ERROR_MESSAGE_LEN));
    assert!(long.ends_with("... (truncated)"));
    assert!(long.len() <= MAX_ERROR_MESSAGE_LEN + "... (truncated)".len());
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
}
