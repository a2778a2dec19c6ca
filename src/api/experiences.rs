use actix_web::{get, web, HttpResponse, Responder};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::entities::experiences;
use crate::shared::api::internal_error;
use crate::store;
use crate::technologies;

/// Experience row with the `technologies` column decoded for the wire.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub id: i32,
    pub title: String,
    pub company: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub order: i32,
}

impl ExperienceView {
    fn from_model(model: experiences::Model) -> Result<Self, serde_json::Error> {
        // Absent column reads as an empty list
        let technologies = technologies::decode_optional(model.technologies.as_deref())?;

        Ok(Self {
            id: model.id,
            title: model.title,
            company: model.company,
            employment_type: model.employment_type,
            location: model.location,
            start_date: model.start_date,
            end_date: model.end_date,
            current: model.current,
            description: model.description,
            technologies,
            order: model.order,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/experiences",
    responses(
        (status = 200, description = "Experiences, ascending display order", body = [ExperienceView]),
        (status = 500, description = "Store unavailable or corrupt technologies column", body = crate::shared::api::ErrorBody)
    ),
    tag = "portfolio"
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let rows = match store::experiences::list(&db).await {
        Ok(rows) => rows,
        Err(err) => {
            error!("Failed to list experiences: {err}");
            return internal_error();
        }
    };

    match rows
        .into_iter()
        .map(ExperienceView::from_model)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(views) => HttpResponse::Ok().json(views),
        Err(err) => {
            error!("Corrupt technologies column in experiences: {err}");
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::Value;

    fn sample_experience(
        id: i32,
        order: i32,
        technologies: Option<&str>,
    ) -> experiences::Model {
        experiences::Model {
            id,
            title: "Développeur Fullstack".to_string(),
            company: "Optera".to_string(),
            employment_type: "alternance".to_string(),
            location: "Pays Basque".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: None,
            current: true,
            description: "Description".to_string(),
            technologies: technologies.map(str::to_string),
            order,
        }
    }

    async fn run(db: DatabaseConnection) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(db)))
                .service(get_experiences_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_get_experiences_decodes_technologies() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_experience(
                1,
                1,
                Some(r#"["Nuxt.js","Django"]"#),
            )]])
            .into_connection();

        let resp = run(db).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["type"], "alternance");
        assert_eq!(
            body[0]["technologies"],
            serde_json::json!(["Nuxt.js", "Django"])
        );
    }

    #[actix_web::test]
    async fn test_get_experiences_absent_technologies_is_empty_array() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_experience(1, 1, None)]])
            .into_connection();

        let resp = run(db).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["technologies"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_get_experiences_corrupt_technologies_is_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_experience(1, 1, Some("not json"))]])
            .into_connection();

        let resp = run(db).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
