// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-2xx response. Successful responses put their payload
/// directly on the wire (arrays, objects or `null`), without an envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    #[schema(example = "Email invalide.")]
    pub message: String,
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody {
        message: message.to_string(),
    })
}

pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody {
        message: "An unexpected error occurred".to_string(),
    })
}
