use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::entities::projects;
use crate::shared::api::internal_error;
use crate::store::{self, projects::ProjectFilter};
use crate::technologies;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectsQuery {
    /// Narrows to featured projects only when the raw value is exactly "true"
    pub featured: Option<String>,
    /// Exact-match category filter (e.g. web/desktop)
    pub category: Option<String>,
}

/// Project row with the `technologies` column decoded for the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub order: i32,
}

impl ProjectView {
    fn from_model(model: projects::Model) -> Result<Self, serde_json::Error> {
        // Required column: a row that does not decode fails the request
        let technologies = technologies::decode(&model.technologies)?;

        Ok(Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            long_description: model.long_description,
            image_url: model.image_url,
            github_url: model.github_url,
            technologies,
            category: model.category,
            featured: model.featured,
            order: model.order,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Projects, ascending display order", body = [ProjectView]),
        (status = 500, description = "Store unavailable or corrupt technologies column", body = crate::shared::api::ErrorBody)
    ),
    tag = "portfolio"
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectsQuery>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> impl Responder {
    let query = query.into_inner();
    let filter = ProjectFilter {
        featured: query.featured.as_deref() == Some("true"),
        category: query.category,
    };

    let rows = match store::projects::list(&db, filter).await {
        Ok(rows) => rows,
        Err(err) => {
            error!("Failed to list projects: {err}");
            return internal_error();
        }
    };

    match rows
        .into_iter()
        .map(ProjectView::from_model)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(views) => HttpResponse::Ok().json(views),
        Err(err) => {
            error!("Corrupt technologies column in projects: {err}");
            internal_error()
        }
    }
}
