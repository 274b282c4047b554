use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{OverrideLevel, Result, StorageError};
use crate::models::{GenusOverride, ScientificName, SpeciesOverride};
use crate::repository::catalog::CatalogRepository;

const GENUS_COLUMNS: &str = "override_id, club_id, genus_name, points, example_species, \
                             species_count, override_count, created_at, updated_at";
const SPECIES_COLUMNS: &str = "override_id, club_id, species_name, points, created_at, updated_at";

/// Outcome of an exact override lookup.
///
/// `Ambiguous` means more than one row exists for a key that is supposed
/// to be unique. Callers must surface it as a data-integrity error; the
/// store never picks one row on their behalf.
#[derive(Debug)]
pub enum OverrideLookup<T> {
    None,
    One(T),
    Ambiguous(usize),
}

/// Per-club genus- and species-level point configuration.
///
/// The store does no deduplication on create; the resolver's lazy-creation
/// protocol owns that, accepting the documented check-then-act race.
pub struct OverrideRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OverrideRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_species_override(
        &self,
        club_id: Uuid,
        species_name: &str,
    ) -> Result<OverrideLookup<SpeciesOverride>> {
        let mut rows = sqlx::query_as::<_, SpeciesOverride>(&format!(
            "SELECT {SPECIES_COLUMNS} FROM species_overrides \
             WHERE club_id = ? AND species_name = ? ORDER BY created_at"
        ))
        .bind(club_id)
        .bind(species_name)
        .fetch_all(self.pool)
        .await?;

        Ok(match rows.len() {
            0 => OverrideLookup::None,
            1 => OverrideLookup::One(rows.remove(0)),
            n => OverrideLookup::Ambiguous(n),
        })
    }

    pub async fn find_genus_override(
        &self,
        club_id: Uuid,
        genus_name: &str,
    ) -> Result<OverrideLookup<GenusOverride>> {
        let mut rows = sqlx::query_as::<_, GenusOverride>(&format!(
            "SELECT {GENUS_COLUMNS} FROM genus_overrides \
             WHERE club_id = ? AND genus_name = ? ORDER BY created_at"
        ))
        .bind(club_id)
        .bind(genus_name)
        .fetch_all(self.pool)
        .await?;

        Ok(match rows.len() {
            0 => OverrideLookup::None,
            1 => OverrideLookup::One(rows.remove(0)),
            n => OverrideLookup::Ambiguous(n),
        })
    }

    pub async fn find_genus_by_id(&self, override_id: Uuid) -> Result<GenusOverride> {
        let row = sqlx::query_as::<_, GenusOverride>(&format!(
            "SELECT {GENUS_COLUMNS} FROM genus_overrides WHERE override_id = ?"
        ))
        .bind(override_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(row)
    }

    pub async fn list_genus_overrides(&self, club_id: Uuid) -> Result<Vec<GenusOverride>> {
        let rows = sqlx::query_as::<_, GenusOverride>(&format!(
            "SELECT {GENUS_COLUMNS} FROM genus_overrides WHERE club_id = ? ORDER BY genus_name"
        ))
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_species_overrides(&self, club_id: Uuid) -> Result<Vec<SpeciesOverride>> {
        let rows = sqlx::query_as::<_, SpeciesOverride>(&format!(
            "SELECT {SPECIES_COLUMNS} FROM species_overrides \
             WHERE club_id = ? ORDER BY species_name"
        ))
        .bind(club_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// How many genus overrides a club has at all. Zero gates backfill.
    pub async fn genus_override_count(&self, club_id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM genus_overrides WHERE club_id = ?")
                .bind(club_id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Species-level overrides under a genus, by byte-exact prefix
    /// match. Feeds the cached `override_count` on the genus row.
    pub async fn count_species_overrides_in_genus(
        &self,
        club_id: Uuid,
        genus: &str,
    ) -> Result<i64> {
        let prefix = ScientificName::genus_prefix(genus);

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM species_overrides \
             WHERE club_id = ?1 AND substr(species_name, 1, length(?2)) = ?2",
        )
        .bind(club_id)
        .bind(prefix)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    pub async fn create_genus_override(
        &self,
        club_id: Uuid,
        genus_name: &str,
        example_species: Option<&str>,
        points: i64,
        species_count: i64,
        override_count: i64,
    ) -> Result<GenusOverride> {
        let now = chrono::Utc::now().naive_utc();
        let row = GenusOverride {
            override_id: Uuid::new_v4(),
            club_id,
            genus_name: genus_name.to_string(),
            points,
            example_species: example_species.map(String::from),
            species_count,
            override_count,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO genus_overrides (override_id, club_id, genus_name, points, \
             example_species, species_count, override_count, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.override_id)
        .bind(row.club_id)
        .bind(&row.genus_name)
        .bind(row.points)
        .bind(&row.example_species)
        .bind(row.species_count)
        .bind(row.override_count)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn create_species_override(
        &self,
        club_id: Uuid,
        species_name: &str,
        points: i64,
    ) -> Result<SpeciesOverride> {
        let now = chrono::Utc::now().naive_utc();
        let row = SpeciesOverride {
            override_id: Uuid::new_v4(),
            club_id,
            species_name: species_name.to_string(),
            points,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO species_overrides (override_id, club_id, species_name, points, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(row.override_id)
        .bind(row.club_id)
        .bind(&row.species_name)
        .bind(row.points)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_genus_points(&self, override_id: Uuid, points: i64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE genus_overrides SET points = ?, updated_at = ? WHERE override_id = ?",
        )
        .bind(points)
        .bind(chrono::Utc::now().naive_utc())
        .bind(override_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn update_species_points(&self, override_id: Uuid, points: i64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE species_overrides SET points = ?, updated_at = ? WHERE override_id = ?",
        )
        .bind(points)
        .bind(chrono::Utc::now().naive_utc())
        .bind(override_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    /// Removes one override row by id. This is how an administrator
    /// resolves a reported duplicate pair.
    pub async fn delete_genus_override(&self, override_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM genus_overrides WHERE override_id = ?")
            .bind(override_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_species_override(&self, override_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM species_overrides WHERE override_id = ?")
            .bind(override_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    /// Recomputes the cached counters on a genus override from source:
    /// the catalog for `species_count`, the species-override table for
    /// `override_count`. The caches are display hints, never authority.
    pub async fn recount_genus_counters(
        &self,
        club_id: Uuid,
        genus_name: &str,
    ) -> Result<GenusOverride> {
        let row = match self.find_genus_override(club_id, genus_name).await? {
            OverrideLookup::One(row) => row,
            OverrideLookup::None => return Err(StorageError::NotFound),
            OverrideLookup::Ambiguous(_) => {
                return Err(StorageError::DuplicateOverride {
                    level: OverrideLevel::Genus,
                    key: genus_name.to_string(),
                });
            }
        };

        let species_count = CatalogRepository::new(self.pool)
            .count_in_genus(genus_name)
            .await?;
        let override_count = self
            .count_species_overrides_in_genus(club_id, genus_name)
            .await?;
        let updated_at = chrono::Utc::now().naive_utc();

        sqlx::query(
            "UPDATE genus_overrides SET species_count = ?, override_count = ?, updated_at = ? \
             WHERE override_id = ?",
        )
        .bind(species_count)
        .bind(override_count)
        .bind(updated_at)
        .bind(row.override_id)
        .execute(self.pool)
        .await?;

        Ok(GenusOverride {
            species_count,
            override_count,
            updated_at,
            ..row
        })
    }
}
