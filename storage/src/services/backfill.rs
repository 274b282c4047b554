use std::collections::BTreeMap;

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Club, ScientificName};
use crate::repository::catalog::CatalogRepository;
use crate::repository::overrides::OverrideRepository;

/// Seeds a club's genus overrides from the full species catalog.
///
/// Gated on the club having zero genus overrides; a club that already has
/// rows is left untouched and the run reports zero creations. Each unique
/// genus gets one override at `club.default_points` with a cached species
/// count from prefix matching; species without a separable genus are
/// skipped.
pub async fn backfill_genus_overrides(pool: &SqlitePool, club: &Club) -> Result<u64> {
    let overrides = OverrideRepository::new(pool);

    let existing = overrides.genus_override_count(club.club_id).await?;
    if existing > 0 {
        tracing::warn!(
            club_id = %club.club_id,
            existing,
            "Backfill skipped: club already has genus overrides"
        );
        return Ok(0);
    }

    let catalog = CatalogRepository::new(pool);
    let species = catalog.list().await?;

    // Dedup by genus before writing; BTreeMap keeps creation order stable.
    let mut genera: BTreeMap<String, String> = BTreeMap::new();
    for row in &species {
        let name = ScientificName::new(row.scientific_name.as_str());
        match name.genus() {
            Some(genus) => {
                genera
                    .entry(genus.to_string())
                    .or_insert_with(|| row.scientific_name.clone());
            }
            None => {
                tracing::warn!(
                    species = %row.scientific_name,
                    "Backfill skipped catalog entry without a genus token"
                );
            }
        }
    }

    let mut created = 0u64;
    for (genus, example_species) in &genera {
        // Counted by the same query recount uses, so the cache and a
        // later recount cannot disagree.
        let species_count = catalog.count_in_genus(genus).await?;

        overrides
            .create_genus_override(
                club.club_id,
                genus,
                Some(example_species),
                club.default_points,
                species_count,
                0,
            )
            .await?;
        created += 1;
    }

    tracing::info!(
        club_id = %club.club_id,
        created,
        "Backfilled genus overrides from species catalog"
    );

    Ok(created)
}
