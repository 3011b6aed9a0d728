//! Request parameter extraction
//!
//! The student id is resolved while routing and handed to handlers as an
//! explicit extractor value, so a handler never runs with an unparsed id.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::warn;

use super::errors::ApiError;
use crate::model::{StudentId, StudentPayload};

/// Student id taken from the last path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentIdPath(pub StudentId);

#[async_trait]
impl<S> FromRequestParts<S> for StudentIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        parse_student_id(path).map(StudentIdPath).ok_or_else(|| {
            warn!(path, "rejecting non-integer studentId");
            ApiError::InvalidStudentId
        })
    }
}

/// Parse the last segment of `path` as a non-negative integer id
pub fn parse_student_id(path: &str) -> Option<StudentId> {
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<StudentId>().ok()
}

/// Decode a `{name, age}` body regardless of the declared content type
pub fn decode_payload(body: &[u8]) -> Result<StudentPayload, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "error unmarshalling request body");
        ApiError::InvalidBody
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_student_id() {
        assert_eq!(parse_student_id("/api/v1/students/100"), Some(100));
        assert_eq!(parse_student_id("/students/0"), Some(0));
        assert_eq!(parse_student_id("/students/7/"), Some(7));
    }

    #[test]
    fn test_parse_student_id_rejects_non_integers() {
        assert_eq!(parse_student_id("/students/abc"), None);
        assert_eq!(parse_student_id("/students/-1"), None);
        assert_eq!(parse_student_id("/students/+1"), None);
        assert_eq!(parse_student_id("/students/1.5"), None);
        assert_eq!(parse_student_id("/students/"), None);
        assert_eq!(parse_student_id("/students/99999999999999999999"), None);
    }

    #[test]
    fn test_decode_payload() {
        let payload = decode_payload(br#"{"name":"Swagnik","age":32}"#).unwrap();
        assert_eq!(payload, StudentPayload::new("Swagnik", 32));

        assert_eq!(decode_payload(b"").unwrap_err(), ApiError::InvalidBody);
        assert_eq!(decode_payload(b"\"\"\n").unwrap_err(), ApiError::InvalidBody);
        assert_eq!(
            decode_payload(br#"{"name":"x"}"#).unwrap_err(),
            ApiError::InvalidBody
        );
    }
}
