//! JSON REST handlers mounted under `/api`.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod content;
pub mod email;
pub mod orders;
pub mod predefined;
pub mod products;
pub mod upload;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a `{"error": ...}` response with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        error: message.into(),
    })
}

/// Translate a service failure into its HTTP response.
///
/// `action` names the failed operation in server logs.
pub fn service_error_response(action: &str, err: ServiceError) -> HttpResponse {
    let status = match &err {
        ServiceError::Form(_) | ServiceError::Media(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Conflict => StatusCode::CONFLICT,
        ServiceError::Mail(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Storage(_) | ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        log::error!("Failed to {action}: {err}");
    } else {
        log::debug!("Rejected request to {action}: {err}");
    }

    json_error(status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Form("bad".to_string()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::Conflict, StatusCode::CONFLICT),
            (ServiceError::Mail("down".to_string()), StatusCode::BAD_GATEWAY),
            (ServiceError::Media("pdf".to_string()), StatusCode::BAD_REQUEST),
            (ServiceError::Storage("disk full".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(service_error_response("test", err).status(), expected);
        }
    }

    #[actix_web::test]
    async fn error_body_is_json() {
        let response = service_error_response("load product", ServiceError::NotFound);
        let body = to_bytes(response.into_body()).await.expect("body");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(value["error"], "not found");
    }
}
