use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "JSON API serving the portfolio content and the public contact form"
    ),
    paths(
        crate::api::profile::get_profile_handler,
        crate::api::skills::get_skills_handler,
        crate::api::experiences::get_experiences_handler,
        crate::api::education::get_education_handler,
        crate::api::projects::get_projects_handler,
        crate::api::contact::submit_contact_handler,
    ),
    tags(
        (name = "portfolio", description = "Read-only portfolio content"),
        (name = "contact", description = "Public contact form intake")
    )
)]
pub struct ApiDoc;
