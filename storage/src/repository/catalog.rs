use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::catalog::CreateSpeciesRequest;
use crate::error::{Result, StorageError};
use crate::models::{CatalogSpecies, ScientificName};

const SPECIES_COLUMNS: &str =
    "species_id, scientific_name, common_name, is_conservation_priority, created_at";

/// Read access to the species catalog, maintained by an external
/// collaborator. The engine needs name lookup, genus prefix matching and
/// full enumeration (for backfill).
pub struct CatalogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CatalogRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<CatalogSpecies>> {
        let species = sqlx::query_as::<_, CatalogSpecies>(&format!(
            "SELECT {SPECIES_COLUMNS} FROM species_catalog ORDER BY scientific_name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(species)
    }

    pub async fn find_by_name(&self, scientific_name: &str) -> Result<Option<CatalogSpecies>> {
        let species = sqlx::query_as::<_, CatalogSpecies>(&format!(
            "SELECT {SPECIES_COLUMNS} FROM species_catalog WHERE scientific_name = ?"
        ))
        .bind(scientific_name)
        .fetch_optional(self.pool)
        .await?;

        Ok(species)
    }

    pub async fn list_by_genus(&self, genus: &str) -> Result<Vec<CatalogSpecies>> {
        let prefix = ScientificName::genus_prefix(genus);

        // substr keeps the match byte-exact; LIKE would fold ASCII case
        // and treat % and _ in the genus as wildcards.
        let species = sqlx::query_as::<_, CatalogSpecies>(&format!(
            "SELECT {SPECIES_COLUMNS} FROM species_catalog \
             WHERE substr(scientific_name, 1, length(?1)) = ?1 ORDER BY scientific_name"
        ))
        .bind(prefix)
        .fetch_all(self.pool)
        .await?;

        Ok(species)
    }

    /// Number of catalog species under a genus, by byte-exact prefix
    /// match on "genus + separator". Every cached `species_count` in the
    /// tree comes through here so recounts always agree.
    pub async fn count_in_genus(&self, genus: &str) -> Result<i64> {
        let prefix = ScientificName::genus_prefix(genus);

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM species_catalog \
             WHERE substr(scientific_name, 1, length(?1)) = ?1",
        )
        .bind(prefix)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    pub async fn create(&self, request: &CreateSpeciesRequest) -> Result<CatalogSpecies> {
        let species = CatalogSpecies {
            species_id: Uuid::new_v4(),
            scientific_name: request.scientific_name.clone(),
            common_name: request.common_name.clone(),
            is_conservation_priority: request.is_conservation_priority,
            created_at: chrono::Utc::now().naive_utc(),
        };

        let result = sqlx::query(
            "INSERT INTO species_catalog (species_id, scientific_name, common_name, \
             is_conservation_priority, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(species.species_id)
        .bind(&species.scientific_name)
        .bind(&species.common_name)
        .bind(species.is_conservation_priority)
        .bind(species.created_at)
        .execute(self.pool)
        .await;

        if let Err(e) = result {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                return Err(StorageError::ConstraintViolation(format!(
                    "Species '{}' is already in the catalog",
                    species.scientific_name
                )));
            }
            return Err(error);
        }

        Ok(species)
    }
}
