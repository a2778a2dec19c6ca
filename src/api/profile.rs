use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::error;

use crate::shared::api::internal_error;
use crate::store;

/// The profile is a singleton: the first row found wins, and an empty store
/// reads as JSON `null`, never an error.
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Current profile, or null when the store is empty", body = crate::entities::profiles::Model),
        (status = 500, description = "Store unavailable", body = crate::shared::api::ErrorBody)
    ),
    tag = "portfolio"
)]
#[get("/api/profile")]
pub async fn get_profile_handler(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match store::profile::find_current(&db).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("Failed to fetch profile: {err}");
            internal_error()
        }
    }
}
