//! HTTP Routes
//!
//! Handlers delegate to the application services and translate domain
//! errors into status codes plus an `{error}` envelope.

pub mod llm;
pub mod preferences;
pub mod prompts;
pub mod swagger;

use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use promptdeck::DomainError;

use crate::models::ErrorResponse;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to its HTTP representation.
pub fn error_response(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::Validation(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
        DomainError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Parse a path segment as a record ID; malformed input is a 400, not
/// a 404.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| error_response(DomainError::InvalidId(raw.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdeck::INVALID_ID_PREFIX;

    #[test]
    fn malformed_id_is_a_400_before_any_lookup() {
        let (status, Json(body)) = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.starts_with(INVALID_ID_PREFIX));
        assert!(body.error.contains("not-a-uuid"));
    }

    #[test]
    fn well_formed_id_parses_through() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn each_error_variant_maps_to_its_status() {
        let cases = [
            (DomainError::validation("missing title"), StatusCode::BAD_REQUEST),
            (
                DomainError::InvalidId("xyz".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::not_found("Prompt", Uuid::new_v4()),
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::Upstream("provider down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                DomainError::StoreUnavailable("pool closed".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let message = err.to_string();
            let (status, Json(body)) = error_response(err);
            assert_eq!(status, expected);
            assert_eq!(body.error, message);
        }
    }
}
