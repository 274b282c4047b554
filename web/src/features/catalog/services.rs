use sqlx::SqlitePool;
use storage::{
    dto::catalog::{CatalogFilter, CreateSpeciesRequest},
    error::Result,
    models::CatalogSpecies,
    repository::catalog::CatalogRepository,
};

/// List catalog species, optionally restricted to one genus
pub async fn list_species(
    pool: &SqlitePool,
    filter: &CatalogFilter,
) -> Result<Vec<CatalogSpecies>> {
    let repo = CatalogRepository::new(pool);

    match filter.genus.as_deref() {
        Some(genus) => repo.list_by_genus(genus).await,
        None => repo.list().await,
    }
}

/// Add a species to the catalog
pub async fn create_species(
    pool: &SqlitePool,
    request: &CreateSpeciesRequest,
) -> Result<CatalogSpecies> {
    let repo = CatalogRepository::new(pool);
    repo.create(request).await
}
