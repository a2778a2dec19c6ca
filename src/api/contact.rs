use actix_web::{post, web, HttpResponse, Responder};
use regex::Regex;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use tracing::error;
use utoipa::ToSchema;

use crate::shared::api::{bad_request, internal_error};
use crate::store::{self, contact::NewContactMessage};

/// Syntactic sanity check only: something@something.something, no
/// whitespace or extra "@". Accepts some invalid and rejects some
/// exotic-but-valid addresses.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactAck {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Message envoyé avec succès !")]
    pub message: String,
    /// Generated identifier of the stored message
    pub id: i32,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored", body = ContactAck),
        (status = 400, description = "Missing field or invalid email", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Store unavailable", body = crate::shared::api::ErrorBody)
    ),
    tag = "contact"
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    body: web::Json<ContactRequest>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> impl Responder {
    let body = body.into_inner();

    let name = body.name.unwrap_or_default();
    let email = body.email.unwrap_or_default();
    let message = body.message.unwrap_or_default();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return bad_request("Nom, email et message sont requis.");
    }

    if !EMAIL_RE.is_match(&email) {
        return bad_request("Email invalide.");
    }

    // Empty-string subject is stored as absent
    let subject = body.subject.filter(|s| !s.is_empty());

    let data = NewContactMessage {
        name,
        email,
        subject,
        message,
    };

    match store::contact::create(&db, data).await {
        Ok(stored) => HttpResponse::Ok().json(ContactAck {
            success: true,
            message: "Message envoyé avec succès !".to_string(),
            id: stored.id,
        }),
        Err(err) => {
            error!("Failed to store contact message: {err}");
            internal_error()
        }
    }
}
