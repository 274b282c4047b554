use sqlx::SqlitePool;
use storage::{
    dto::overrides::{CreateGenusOverrideRequest, CreateSpeciesOverrideRequest},
    error::{OverrideLevel, Result, StorageError},
    models::{GenusOverride, SpeciesOverride},
    repository::catalog::CatalogRepository,
    repository::club::ClubRepository,
    repository::overrides::{OverrideLookup, OverrideRepository},
    services::backfill::backfill_genus_overrides,
};
use uuid::Uuid;

pub async fn list_genus_overrides(pool: &SqlitePool, club_id: Uuid) -> Result<Vec<GenusOverride>> {
    let repo = OverrideRepository::new(pool);
    repo.list_genus_overrides(club_id).await
}

pub async fn list_species_overrides(
    pool: &SqlitePool,
    club_id: Uuid,
) -> Result<Vec<SpeciesOverride>> {
    let repo = OverrideRepository::new(pool);
    repo.list_species_overrides(club_id).await
}

/// Admin creation of a genus override. Unlike the resolver's lazy path,
/// this refuses to add a second row for an existing pair.
pub async fn create_genus_override(
    pool: &SqlitePool,
    club_id: Uuid,
    request: &CreateGenusOverrideRequest,
) -> Result<GenusOverride> {
    let repo = OverrideRepository::new(pool);

    match repo.find_genus_override(club_id, &request.genus_name).await? {
        OverrideLookup::One(_) => {
            return Err(StorageError::ConstraintViolation(format!(
                "Genus override for '{}' already exists",
                request.genus_name
            )));
        }
        OverrideLookup::Ambiguous(_) => {
            return Err(StorageError::DuplicateOverride {
                level: OverrideLevel::Genus,
                key: request.genus_name.clone(),
            });
        }
        OverrideLookup::None => {}
    }

    let species_count = CatalogRepository::new(pool)
        .count_in_genus(&request.genus_name)
        .await?;
    let override_count = repo
        .count_species_overrides_in_genus(club_id, &request.genus_name)
        .await?;

    repo.create_genus_override(
        club_id,
        &request.genus_name,
        request.example_species.as_deref(),
        request.points,
        species_count,
        override_count,
    )
    .await
}

pub async fn create_species_override(
    pool: &SqlitePool,
    club_id: Uuid,
    request: &CreateSpeciesOverrideRequest,
) -> Result<SpeciesOverride> {
    let repo = OverrideRepository::new(pool);

    match repo
        .find_species_override(club_id, &request.species_name)
        .await?
    {
        OverrideLookup::One(_) => {
            return Err(StorageError::ConstraintViolation(format!(
                "Species override for '{}' already exists",
                request.species_name
            )));
        }
        OverrideLookup::Ambiguous(_) => {
            return Err(StorageError::DuplicateOverride {
                level: OverrideLevel::Species,
                key: request.species_name.clone(),
            });
        }
        OverrideLookup::None => {}
    }

    repo.create_species_override(club_id, &request.species_name, request.points)
        .await
}

pub async fn update_genus_points(
    pool: &SqlitePool,
    override_id: Uuid,
    points: i64,
) -> Result<GenusOverride> {
    let repo = OverrideRepository::new(pool);
    repo.update_genus_points(override_id, points).await?;
    repo.find_genus_by_id(override_id).await
}

pub async fn update_species_points(
    pool: &SqlitePool,
    override_id: Uuid,
    points: i64,
) -> Result<()> {
    let repo = OverrideRepository::new(pool);
    repo.update_species_points(override_id, points).await
}

pub async fn delete_genus_override(pool: &SqlitePool, override_id: Uuid) -> Result<()> {
    let repo = OverrideRepository::new(pool);
    repo.delete_genus_override(override_id).await
}

pub async fn delete_species_override(pool: &SqlitePool, override_id: Uuid) -> Result<()> {
    let repo = OverrideRepository::new(pool);
    repo.delete_species_override(override_id).await
}

/// Seed a club's genus overrides from the catalog; no-op unless the club
/// has zero rows.
pub async fn backfill(pool: &SqlitePool, club_id: Uuid) -> Result<u64> {
    let club = ClubRepository::new(pool).find_by_id(club_id).await?;
    backfill_genus_overrides(pool, &club).await
}

/// Refresh the cached counters on one genus override from source data.
pub async fn recount(pool: &SqlitePool, override_id: Uuid) -> Result<GenusOverride> {
    let repo = OverrideRepository::new(pool);
    let row = repo.find_genus_by_id(override_id).await?;
    repo.recount_genus_counters(row.club_id, &row.genus_name)
        .await
}
