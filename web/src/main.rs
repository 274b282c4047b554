use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::clubs::handlers::list_clubs,
        features::clubs::handlers::get_club,
        features::clubs::handlers::create_club,
        features::members::handlers::list_members,
        features::members::handlers::create_member,
        features::catalog::handlers::list_species,
        features::catalog::handlers::create_species,
        features::overrides::handlers::list_genus_overrides,
        features::overrides::handlers::list_species_overrides,
        features::overrides::handlers::create_genus_override,
        features::overrides::handlers::create_species_override,
        features::overrides::handlers::update_genus_points,
        features::overrides::handlers::update_species_points,
        features::overrides::handlers::delete_genus_override,
        features::overrides::handlers::delete_species_override,
        features::overrides::handlers::backfill_genus_overrides,
        features::overrides::handlers::recount_genus_override,
        features::submissions::handlers::create_submission,
        features::submissions::handlers::get_submission,
        features::submissions::handlers::list_submissions,
        features::submissions::handlers::approve_submission,
        features::submissions::handlers::decline_submission,
        features::submissions::handlers::resubmit_submission,
        features::submissions::handlers::close_submission,
        features::submissions::handlers::update_notes,
        features::leaderboard::handlers::get_standings,
        features::leaderboard::handlers::recompute_leaderboard,
    ),
    components(
        schemas(
            storage::dto::club::CreateClubRequest,
            storage::dto::member::CreateMemberRequest,
            storage::dto::catalog::CreateSpeciesRequest,
            storage::dto::overrides::CreateGenusOverrideRequest,
            storage::dto::overrides::CreateSpeciesOverrideRequest,
            storage::dto::overrides::UpdateOverridePointsRequest,
            storage::dto::overrides::BackfillSummary,
            storage::dto::submission::CreateSubmissionRequest,
            storage::dto::submission::ApproveSubmissionRequest,
            storage::dto::submission::UpdateNotesRequest,
            storage::dto::submission::SubmissionCreated,
            storage::dto::leaderboard::MemberInfo,
            storage::dto::leaderboard::StandingRow,
            storage::models::Club,
            storage::models::Member,
            storage::models::CatalogSpecies,
            storage::models::GenusOverride,
            storage::models::SpeciesOverride,
            storage::models::Submission,
            storage::models::SubmissionStatus,
            storage::models::LeaderboardEntry,
        )
    ),
    tags(
        (name = "clubs", description = "Club award-program configuration"),
        (name = "members", description = "Member registry"),
        (name = "catalog", description = "Species catalog"),
        (name = "overrides", description = "Genus and species point overrides"),
        (name = "submissions", description = "Breeding submissions and review workflow"),
        (name = "leaderboard", description = "Per-period standings"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Breeder Awards API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let app = Router::new()
        .nest("/api/clubs", features::clubs::routes::routes(api_keys.clone()))
        .nest(
            "/api/clubs/:club_id/overrides",
            features::overrides::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/clubs/:club_id/leaderboard",
            features::leaderboard::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/members",
            features::members::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/catalog",
            features::catalog::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/submissions",
            features::submissions::routes::routes(api_keys.clone()),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listen address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
