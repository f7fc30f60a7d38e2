//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case::invalid_request(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case::not_found(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case::rate_limited(Error::rate_limited("slow down"), StatusCode::TOO_MANY_REQUESTS)]
#[case::creation_failed(Error::creation_failed("no data"), StatusCode::BAD_GATEWAY)]
#[case::upstream(Error::upstream("status 500"), StatusCode::BAD_GATEWAY)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn decode_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection pool exhausted")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "secret": "x" }));

    let payload = decode_response(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("name must not be blank")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "name", "code": "blank_field" }));

    let payload = decode_response(
        error,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.message(), "name must not be blank");
    assert_eq!(
        payload.details(),
        Some(&json!({ "field": "name", "code": "blank_field" }))
    );
}

#[rstest]
#[actix_web::test]
async fn rate_limited_without_trace_id_omits_header() {
    let payload = decode_response(
        Error::rate_limited("slow down"),
        StatusCode::TOO_MANY_REQUESTS,
        None,
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::RateLimited);
    assert_eq!(payload.trace_id(), None);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
