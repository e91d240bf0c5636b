//! Translation of manager operation failures into HTTP error codes.

use vna_types::{Status, StatusCode};

/// Translates a failed manager status into the HTTP error returned by the
/// northbound API.
///
/// The caller guarantees `status` represents a failure; passing a success
/// status is a handler bug and trips a debug assertion rather than being
/// handled at runtime.
///
/// Mapping:
/// - `BadRequest` → 400
/// - `Conflict` → 409
/// - `NotAcceptable` → 406
/// - `NotFound` → 404
/// - any other failure → 500
pub fn error_status(status: &Status) -> http::StatusCode {
    debug_assert!(
        !status.is_success(),
        "error_status called with a success status"
    );

    tracing::debug!(
        "operation failed: code - {}, description - {}",
        status.code(),
        status.description()
    );

    match status.code() {
        StatusCode::BadRequest => http::StatusCode::BAD_REQUEST,
        StatusCode::Conflict => http::StatusCode::CONFLICT,
        StatusCode::NotAcceptable => http::StatusCode::NOT_ACCEPTABLE,
        StatusCode::NotFound => http::StatusCode::NOT_FOUND,
        _ => http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_failure_codes() {
        assert_eq!(
            error_status(&Status::new(StatusCode::BadRequest)),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&Status::new(StatusCode::Conflict)),
            http::StatusCode::CONFLICT
        );
        assert_eq!(
            error_status(&Status::new(StatusCode::NotAcceptable)),
            http::StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            error_status(&Status::new(StatusCode::NotFound)),
            http::StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let status = Status::with_description(StatusCode::NotFound, "no such network");

        assert_eq!(error_status(&status).as_u16(), 404);
    }

    #[test]
    fn test_unmapped_failures_become_internal_error() {
        let unmapped = [
            StatusCode::Unauthorized,
            StatusCode::Forbidden,
            StatusCode::Timeout,
            StatusCode::InternalError,
            StatusCode::NotImplemented,
        ];

        for code in unmapped {
            assert_eq!(
                error_status(&Status::new(code)),
                http::StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_only_success_and_created_are_success() {
        assert!(Status::new(StatusCode::Success).is_success());
        assert!(Status::new(StatusCode::Created).is_success());
        assert!(!Status::new(StatusCode::NotFound).is_success());
        assert!(!Status::new(StatusCode::InternalError).is_success());
    }

    #[test]
    fn test_status_display_carries_description() {
        let status = Status::with_description(StatusCode::Conflict, "network already exists");

        assert_eq!(status.to_string(), "Conflict: network already exists");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "success status")]
    fn test_success_status_is_a_caller_bug() {
        error_status(&Status::new(StatusCode::Success));
    }
}
