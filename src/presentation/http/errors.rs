use std::sync::Arc;

use poem::{Endpoint, IntoResponse, Request, Response};
use poem_openapi::payload::Json;
use serde_json::json;

use crate::{
    domain::errors::DomainError,
    presentation::http::responses::{ErrorDto, ErrorResponse},
};

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) | DomainError::AlreadyExists(_) => {
                ErrorResponse::BadRequest(Json(ErrorDto {
                    detail: err.to_string(),
                }))
            }
            DomainError::Other(err) => {
                tracing::error!(error = %err, "store operation failed");
                ErrorResponse::Internal(Json(ErrorDto {
                    detail: "Internal server error".to_string(),
                }))
            }
        }
    }
}

/// Wraps error responses produced before an endpoint runs (body or path
/// parsing, unknown routes) in the same `{"detail": ...}` shape the endpoints use.
pub async fn detail_body<E: Endpoint>(ep: Arc<E>, req: Request) -> poem::Result<Response> {
    let mut resp = ep.get_response(req).await;
    let status = resp.status();
    let is_json = resp
        .content_type()
        .is_some_and(|ct| ct.starts_with("application/json"));
    if !(status.is_client_error() || status.is_server_error()) || is_json {
        return Ok(resp);
    }

    let detail = match resp.take_body().into_string().await {
        Ok(text) if !text.is_empty() => text,
        _ => status.canonical_reason().unwrap_or_default().to_string(),
    };
    Ok(poem::web::Json(json!({ "detail": detail }))
        .with_status(status)
        .into_response())
}
