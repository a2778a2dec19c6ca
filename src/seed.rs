//! One-shot baseline dataset population, invoked out-of-band by the `seed`
//! binary, never by the serving endpoints.
//!
//! Only the profile step is idempotent (upsert on a fixed id). Every other
//! step appends rows unconditionally: re-running duplicates skills,
//! experiences, education, projects and settings. Operators clear those
//! tables first or accept the duplicates.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, Set};
use tracing::info;

use crate::entities::{education, experiences, profiles, projects, site_settings, skills};
use crate::store::{self, profile::SEED_PROFILE_ID, StoreError};
use crate::technologies;

/// Runs every seed step in its fixed order, aborting on the first error.
/// Each entity batch is independent; there is no transaction across steps.
pub async fn run(db: &DatabaseConnection) -> Result<(), StoreError> {
    info!("Seeding database...");

    seed_profile(db).await?;
    seed_skills(db).await?;
    seed_experiences(db).await?;
    seed_education(db).await?;
    seed_projects(db).await?;
    seed_site_settings(db).await?;

    info!("Database seeded successfully");
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn encode_techs(items: &[&str]) -> Result<String, StoreError> {
    let owned: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    Ok(technologies::encode(&owned)?)
}

pub async fn seed_profile(db: &DatabaseConnection) -> Result<(), StoreError> {
    store::profile::upsert(
        db,
        profiles::Model {
            id: SEED_PROFILE_ID,
            name: "François Barlic".to_string(),
            title: "Développeur Fullstack".to_string(),
            subtitle: "Alternant passionné par le web moderne".to_string(),
            bio: "Étudiant en informatique à l'IUT de Bayonne et alternant chez Optera \
                  depuis septembre 2025, je développe des applications web avec Nuxt.js, \
                  Angular, Laravel et Django. Curieux et motivé, j'aime apprendre de \
                  nouvelles technologies et m'adapter aux besoins des projets."
                .to_string(),
            email: "francois.barlic57@gmail.com".to_string(),
            location: "Anglet - 64".to_string(),
            github_url: Some("https://github.com/FranzouGame".to_string()),
            instagram_url: Some("@franzou57".to_string()),
            linkedin_url: None,
        },
    )
    .await?;

    info!("Seeded profile (idempotent upsert on id {SEED_PROFILE_ID})");
    Ok(())
}

pub async fn seed_skills(db: &DatabaseConnection) -> Result<(), StoreError> {
    let skills: &[(&str, i32, &str, i32)] = &[
        ("JavaScript", 95, "frontend", 1),
        ("Nuxt.js", 90, "frontend", 2),
        ("Vue.js", 90, "frontend", 3),
        ("TypeScript", 75, "frontend", 4),
        ("Angular", 70, "frontend", 5),
        ("HTML/CSS", 95, "frontend", 6),
        ("TailwindCSS", 85, "frontend", 7),
        ("Bootstrap", 80, "frontend", 8),
        ("Python", 80, "backend", 1),
        ("Django", 75, "backend", 2),
        ("PHP", 80, "backend", 3),
        ("Laravel", 70, "backend", 4),
        ("C++", 80, "backend", 5),
        ("C", 75, "backend", 6),
        ("SQL", 85, "backend", 7),
        ("NoSQL", 70, "backend", 8),
        ("Git", 90, "tools", 1),
        ("Scrum/Agile", 85, "tools", 2),
        ("Docker", 70, "tools", 3),
        ("Kubernetes", 60, "tools", 4),
        ("Curieux", 100, "soft", 1),
        ("Travail en équipe", 95, "soft", 2),
        ("Autonome", 90, "soft", 3),
        ("Adaptatif", 95, "soft", 4),
    ];

    let rows: Vec<skills::ActiveModel> = skills
        .iter()
        .map(|(name, percentage, category, order)| skills::ActiveModel {
            name: Set(name.to_string()),
            percentage: Set(*percentage),
            category: Set(category.to_string()),
            order: Set(*order),
            ..Default::default()
        })
        .collect();

    let count = rows.len();
    store::skills::create_many(db, rows).await?;

    info!("Seeded {count} skills");
    Ok(())
}

pub async fn seed_experiences(db: &DatabaseConnection) -> Result<(), StoreError> {
    store::experiences::create(
        db,
        experiences::ActiveModel {
            title: Set("Développeur Fullstack".to_string()),
            company: Set("Optera".to_string()),
            employment_type: Set("alternance".to_string()),
            location: Set("Pays Basque".to_string()),
            start_date: Set(date(2025, 9, 1)),
            end_date: Set(None),
            current: Set(true),
            description: Set("Après un stage concluant au sein d'Optera, j'ai été recruté en \
                              alternance pour contribuer à l'intégration et à l'amélioration de \
                              leur application web interne. J'interviens sur le développement \
                              front-end et back-end en utilisant Nuxt.js et Django. Mon rôle \
                              inclut l'optimisation des fonctionnalités existantes, l'intégration \
                              de nouvelles interfaces et la participation active aux rituels \
                              agiles de l'équipe."
                .to_string()),
            technologies: Set(Some(encode_techs(&[
                "Nuxt.js",
                "Django",
                "Python",
                "JavaScript",
                "Scrum",
            ])?)),
            order: Set(1),
            ..Default::default()
        },
    )
    .await?;

    store::experiences::create(
        db,
        experiences::ActiveModel {
            title: Set("Développeur Fullstack".to_string()),
            company: Set("Optera".to_string()),
            employment_type: Set("stage".to_string()),
            location: Set("Pays Basque".to_string()),
            start_date: Set(date(2025, 4, 1)),
            end_date: Set(Some(date(2025, 6, 15))),
            current: Set(false),
            description: Set("Stage de 10 semaines en tant que développeur fullstack. J'ai \
                              participé à l'amélioration de leur application web interne, en \
                              intervenant aussi bien sur le back-end que sur le front-end. J'ai \
                              également été intégré au fonctionnement de l'équipe en prenant part \
                              aux différents rituels Scrum, ce qui m'a permis de développer mes \
                              compétences techniques et ma compréhension des méthodologies \
                              agiles."
                .to_string()),
            technologies: Set(Some(encode_techs(&[
                "Nuxt.js",
                "Django",
                "Python",
                "JavaScript",
                "Scrum",
            ])?)),
            order: Set(2),
            ..Default::default()
        },
    )
    .await?;

    info!("Seeded 2 experiences");
    Ok(())
}

pub async fn seed_education(db: &DatabaseConnection) -> Result<(), StoreError> {
    store::education::create(
        db,
        education::ActiveModel {
            degree: Set("BUT Informatique - Parcours Développement".to_string()),
            school: Set("IUT de Bayonne et du Pays Basque".to_string()),
            location: Set("Anglet".to_string()),
            start_date: Set(date(2023, 9, 1)),
            end_date: Set(None),
            current: Set(true),
            description: Set("Formation complète en informatique couvrant la gestion de projet, \
                              les réseaux, les bases de données et le développement. Découverte \
                              d'une véritable passion pour le développement web à travers de \
                              nombreux projets pratiques."
                .to_string()),
            order: Set(1),
            ..Default::default()
        },
    )
    .await?;

    store::education::create(
        db,
        education::ActiveModel {
            degree: Set("Baccalauréat Général - Mathématiques & NSI".to_string()),
            school: Set("Lycée Les Iscles".to_string()),
            location: Set("Manosque".to_string()),
            start_date: Set(date(2020, 9, 1)),
            end_date: Set(Some(date(2023, 6, 30))),
            current: Set(false),
            description: Set("Parcours général avec options Mathématiques, NSI (Numérique et \
                              Sciences Informatiques) et SI (Sciences de l'Ingénieur). \
                              Acquisition de bases solides en mathématiques, algorithmique et \
                              développement Python. Baccalauréat obtenu avec mention."
                .to_string()),
            order: Set(2),
            ..Default::default()
        },
    )
    .await?;

    info!("Seeded 2 education entries");
    Ok(())
}

pub async fn seed_projects(db: &DatabaseConnection) -> Result<(), StoreError> {
    store::projects::create(
        db,
        projects::ActiveModel {
            title: Set("VHS | Vidéo Home Share".to_string()),
            slug: Set("vhs-video-home-share".to_string()),
            description: Set("Application web responsive complète sur le thème des films et \
                              séries, réalisée en équipe de cinq."
                .to_string()),
            long_description: Set(Some(
                "Pour notre projet principal du 3ème semestre, j'ai participé à la création \
                 d'une application web responsive complète sur le thème des films et séries. \
                 Réalisé en équipe de cinq, nous avons utilisé de nombreuses technologies et \
                 bibliothèques pour créer une plateforme sociale permettant aux utilisateurs de \
                 partager leurs avis et découvrir de nouveaux contenus."
                    .to_string(),
            )),
            image_url: Set(Some("/images/projects/vhs.png".to_string())),
            github_url: Set(Some("https://github.com/maximeBourciez/SAE3.01".to_string())),
            technologies: Set(encode_techs(&[
                "PHP",
                "Twig",
                "Bootstrap",
                "HTML",
                "CSS",
                "JavaScript",
            ])?),
            category: Set("web".to_string()),
            featured: Set(true),
            order: Set(1),
            ..Default::default()
        },
    )
    .await?;

    store::projects::create(
        db,
        projects::ActiveModel {
            title: Set("Paradi de l'aspi".to_string()),
            slug: Set("paradi-de-laspi".to_string()),
            description: Set("Site e-commerce entièrement fonctionnel avec panier, back-office \
                              et optimisation."
                .to_string()),
            long_description: Set(Some(
                "Dans le cadre de l'apprentissage du langage PHP, j'ai réalisé en duo avec un \
                 collègue de l'IUT un site e-commerce entièrement fonctionnel. Le projet inclut \
                 un système de panier complet, un back-office pour la gestion des produits et \
                 des optimisations de performance."
                    .to_string(),
            )),
            image_url: Set(Some("/images/projects/paradi.png".to_string())),
            github_url: Set(Some(
                "https://github.com/FranzouGame/R3.01_ProjetPhp".to_string(),
            )),
            technologies: Set(encode_techs(&["PHP", "Bootstrap", "CSS", "HTML"])?),
            category: Set("web".to_string()),
            featured: Set(false),
            order: Set(2),
            ..Default::default()
        },
    )
    .await?;

    store::projects::create(
        db,
        projects::ActiveModel {
            title: Set("Lecteur de Diaporama".to_string()),
            slug: Set("lecteur-diaporama".to_string()),
            description: Set("Application desktop en C++ avec Qt pour la lecture de diaporamas."
                .to_string()),
            long_description: Set(Some(
                "Projet réalisé en groupe de 3 où nous avons développé entièrement en C++ une \
                 application pour lire des diaporamas en utilisant la programmation orientée \
                 objet. Nous avons utilisé la bibliothèque Qt pour l'interface graphique."
                    .to_string(),
            )),
            image_url: Set(Some("/images/projects/diaporama.png".to_string())),
            github_url: Set(Some(
                "https://github.com/FranzouGame/SAE1.01-LecteurDiaporama".to_string(),
            )),
            technologies: Set(encode_techs(&["C++", "Qt"])?),
            category: Set("desktop".to_string()),
            featured: Set(false),
            order: Set(3),
            ..Default::default()
        },
    )
    .await?;

    store::projects::create(
        db,
        projects::ActiveModel {
            title: Set("Application GMAO".to_string()),
            slug: Set("application-gmao".to_string()),
            description: Set("Application de ticketing pour la gestion des réparations de \
                              machines."
                .to_string()),
            long_description: Set(Some(
                "Conception et développement d'une application de ticketing pour la gestion des \
                 réparations de machines du département GIM de l'IUT, dans le cadre de ma \
                 formation. Cette application permet de suivre l'état des machines et de gérer \
                 les demandes de maintenance."
                    .to_string(),
            )),
            image_url: Set(Some("/images/projects/gmao.png".to_string())),
            github_url: Set(None),
            technologies: Set(encode_techs(&[
                "Python",
                "Django",
                "Vue.js",
                "JavaScript",
                "HTML",
                "CSS",
            ])?),
            category: Set("web".to_string()),
            featured: Set(true),
            order: Set(4),
            ..Default::default()
        },
    )
    .await?;

    info!("Seeded 4 projects");
    Ok(())
}

pub async fn seed_site_settings(db: &DatabaseConnection) -> Result<(), StoreError> {
    let settings: &[(&str, &str, &str)] = &[
        ("site_title", "François Barlic | Portfolio", "string"),
        (
            "site_description",
            "Portfolio de François Barlic - Développeur Fullstack",
            "string",
        ),
        ("primary_color", "#00f5ff", "string"),
        ("secondary_color", "#bf00ff", "string"),
        ("show_3d_hero", "true", "boolean"),
        ("particles_count", "150", "number"),
    ];

    let rows: Vec<site_settings::ActiveModel> = settings
        .iter()
        .map(|(key, value, value_type)| site_settings::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            value_type: Set(value_type.to_string()),
            ..Default::default()
        })
        .collect();

    let count = rows.len();
    store::settings::create_many(db, rows).await?;

    info!("Seeded {count} site settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    // Postgres inserts run through RETURNING "id"
    fn id_row(id: i32) -> Vec<BTreeMap<String, Value>> {
        vec![BTreeMap::from([("id".to_string(), Value::Int(Some(id)))])]
    }

    fn stored_profile() -> profiles::Model {
        profiles::Model {
            id: SEED_PROFILE_ID,
            name: "François Barlic".to_string(),
            title: "Développeur Fullstack".to_string(),
            subtitle: "Alternant passionné par le web moderne".to_string(),
            bio: "Bio".to_string(),
            email: "francois.barlic57@gmail.com".to_string(),
            location: "Anglet - 64".to_string(),
            github_url: None,
            instagram_url: None,
            linkedin_url: None,
        }
    }

    fn stored_experience(id: i32) -> experiences::Model {
        experiences::Model {
            id,
            title: "Développeur Fullstack".to_string(),
            company: "Optera".to_string(),
            employment_type: "alternance".to_string(),
            location: "Pays Basque".to_string(),
            start_date: date(2025, 9, 1),
            end_date: None,
            current: true,
            description: "Description".to_string(),
            technologies: Some(r#"["Nuxt.js"]"#.to_string()),
            order: id,
        }
    }

    fn stored_education(id: i32) -> education::Model {
        education::Model {
            id,
            degree: "BUT Informatique".to_string(),
            school: "IUT de Bayonne".to_string(),
            location: "Anglet".to_string(),
            start_date: date(2023, 9, 1),
            end_date: None,
            current: true,
            description: "Description".to_string(),
            order: id,
        }
    }

    fn stored_project(id: i32, slug: &str) -> projects::Model {
        projects::Model {
            id,
            title: "Projet".to_string(),
            slug: slug.to_string(),
            description: "Description".to_string(),
            long_description: None,
            image_url: None,
            github_url: None,
            technologies: r#"["PHP"]"#.to_string(),
            category: "web".to_string(),
            featured: false,
            order: id,
        }
    }

    #[tokio::test]
    async fn test_run_executes_every_step_in_order() {
        // profile lookup + insert, skills batch, 2 experiences, 2 education
        // entries, 4 projects, settings batch: 12 statements total
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .append_query_results(vec![vec![stored_profile()]])
            .append_query_results(vec![id_row(24)])
            .append_query_results(vec![
                vec![stored_experience(1)],
                vec![stored_experience(2)],
            ])
            .append_query_results(vec![vec![stored_education(1)], vec![stored_education(2)]])
            .append_query_results(vec![
                vec![stored_project(1, "vhs-video-home-share")],
                vec![stored_project(2, "paradi-de-laspi")],
                vec![stored_project(3, "lecteur-diaporama")],
                vec![stored_project(4, "application-gmao")],
            ])
            .append_query_results(vec![id_row(6)])
            .into_connection();

        run(&db).await.unwrap();

        assert_eq!(db.into_transaction_log().len(), 12);
    }

    #[tokio::test]
    async fn test_seed_profile_twice_keeps_single_row() {
        // first run: lookup misses, INSERT follows; second run: lookup hits
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .append_query_results(vec![vec![stored_profile()]])
            .append_query_results(vec![vec![stored_profile()]])
            .into_connection();

        seed_profile(&db).await.unwrap();
        seed_profile(&db).await.unwrap();

        // two lookups, exactly one INSERT
        assert_eq!(db.into_transaction_log().len(), 3);
    }

    #[tokio::test]
    async fn test_seed_skills_twice_appends_twice() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![id_row(24), id_row(48)])
            .into_connection();

        seed_skills(&db).await.unwrap();
        seed_skills(&db).await.unwrap();

        // non-idempotent by design: one INSERT per run
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_projects_aborts_on_duplicate_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_projects_slug_unique\""
                    .to_string(),
            )])
            .into_connection();

        let result = seed_projects(&db).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }
}
