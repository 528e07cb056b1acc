//! Error mapping helpers for the HTTP backend gateway.

use http::StatusCode;
use serde_json::Value;

use crate::api::error::BoardError;

/// Maps a transport or body-decoding failure.
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> BoardError {
    if error.is_decode() {
        BoardError::Decode {
            operation: operation.to_owned(),
            message: error.to_string(),
        }
    } else {
        BoardError::Network {
            operation: operation.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Maps a non-success status and its body.
pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> BoardError {
    BoardError::Rejected {
        operation: operation.to_owned(),
        status: status.as_u16(),
        detail: extract_detail(body),
    }
}

/// Pulls the user-facing message out of an error body.
///
/// The backend sends `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "..."}, ...]}` for request validation failures.
pub(super) fn extract_detail(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::{extract_detail, map_http_error};
    use crate::api::BoardError;

    #[rstest]
    #[case::string_detail(
        r#"{"detail": "Review not found"}"#,
        Some("Review not found")
    )]
    #[case::validation_list(
        r#"{"detail": [{"loc": ["body", "content"], "msg": "too short"}, {"msg": "field required"}]}"#,
        Some("too short; field required")
    )]
    #[case::blank_detail(r#"{"detail": "  "}"#, None)]
    #[case::no_detail(r#"{"error": "boom"}"#, None)]
    #[case::not_json("Internal Server Error", None)]
    #[case::empty("", None)]
    fn extracts_detail_from_error_bodies(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_detail(body).as_deref(), expected);
    }

    #[rstest]
    fn http_errors_become_rejections() {
        let error = map_http_error(
            "submit response",
            StatusCode::CONFLICT,
            r#"{"detail": "Only one response per review."}"#,
        );

        assert_eq!(
            error,
            BoardError::Rejected {
                operation: "submit response".to_owned(),
                status: 409,
                detail: Some("Only one response per review.".to_owned()),
            }
        );
    }
}
