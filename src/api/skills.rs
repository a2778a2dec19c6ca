use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use utoipa::IntoParams;

use crate::shared::api::internal_error;
use crate::store;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SkillsQuery {
    /// Exact-match category filter (frontend/backend/tools/soft)
    pub category: Option<String>,
}

/// Skills in ascending display order. An unknown category yields an empty
/// array, not an error.
#[utoipa::path(
    get,
    path = "/api/skills",
    params(SkillsQuery),
    responses(
        (status = 200, description = "Skills, ascending display order", body = [crate::entities::skills::Model]),
        (status = 500, description = "Store unavailable", body = crate::shared::api::ErrorBody)
    ),
    tag = "portfolio"
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<SkillsQuery>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> impl Responder {
    match store::skills::list(&db, query.category.as_deref()).await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(err) => {
            error!("Failed to list skills: {err}");
            internal_error()
        }
    }
}
