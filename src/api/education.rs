use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::error;

use crate::shared::api::internal_error;
use crate::store;

#[utoipa::path(
    get,
    path = "/api/education",
    responses(
        (status = 200, description = "Education entries, ascending display order", body = [crate::entities::education::Model]),
        (status = 500, description = "Store unavailable", body = crate::shared::api::ErrorBody)
    ),
    tag = "portfolio"
)]
#[get("/api/education")]
pub async fn get_education_handler(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match store::education::list(&db).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(err) => {
            error!("Failed to list education: {err}");
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::Value;

    use crate::entities::education;

    #[actix_web::test]
    async fn test_get_education_returns_ordered_array() {
        let rows = vec![
            education::Model {
                id: 1,
                degree: "BUT Informatique - Parcours Développement".to_string(),
                school: "IUT de Bayonne et du Pays Basque".to_string(),
                location: "Anglet".to_string(),
                start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
                end_date: None,
                current: true,
                description: "Formation complète en informatique.".to_string(),
                order: 1,
            },
            education::Model {
                id: 2,
                degree: "Baccalauréat Général".to_string(),
                school: "Lycée Les Iscles".to_string(),
                location: "Manosque".to_string(),
                start_date: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2023, 6, 30),
                current: false,
                description: "Parcours général.".to_string(),
                order: 2,
            },
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(db)))
                .service(get_education_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/education").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["order"], 1);
        assert_eq!(items[1]["order"], 2);
        assert_eq!(items[0]["startDate"], "2023-09-01");
        assert!(items[0]["endDate"].is_null());
        assert_eq!(items[1]["current"], false);
    }
}
