use sqlx::SqlitePool;

use crate::error::{OverrideLevel, Result, StorageError};
use crate::models::{Club, ScientificName};
use crate::repository::catalog::CatalogRepository;
use crate::repository::overrides::{OverrideLookup, OverrideRepository};

/// Outcome of pricing a prospective submission. The caller snapshots this
/// onto the new submission row; resolution itself never writes submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub points: i64,
    pub conservation_applied: bool,
    pub genus_created: bool,
    pub needs_review: bool,
}

/// Resolves the point value for (club, species name).
///
/// Fallback chain: species override with `points > 0` → genus override →
/// lazily created genus override at `club.default_points` (flagged for
/// review). A conservation-flagged species is multiplied by the club's
/// multiplier after the base value is fixed.
///
/// More than one override row for the same key aborts with
/// `DuplicateOverride` rather than picking a row; a species name without a
/// separable genus token aborts with `GenusUnresolvable`.
pub async fn resolve_points(
    pool: &SqlitePool,
    club: &Club,
    species_name: &str,
    is_conservation_flagged: bool,
) -> Result<Resolution> {
    let overrides = OverrideRepository::new(pool);

    let species_points = match overrides
        .find_species_override(club.club_id, species_name)
        .await?
    {
        OverrideLookup::Ambiguous(_) => {
            return Err(StorageError::DuplicateOverride {
                level: OverrideLevel::Species,
                key: species_name.to_string(),
            });
        }
        // Zero at species level means "not configured"; fall through.
        OverrideLookup::One(row) if row.points > 0 => Some(row.points),
        _ => None,
    };

    let (base_points, genus_created, needs_review) = match species_points {
        Some(points) => (points, false, false),
        None => resolve_genus_points(pool, club, species_name, &overrides).await?,
    };

    let (points, conservation_applied) = if is_conservation_flagged {
        (base_points * club.conservation_multiplier, true)
    } else {
        (base_points, false)
    };

    Ok(Resolution {
        points,
        conservation_applied,
        genus_created,
        needs_review,
    })
}

async fn resolve_genus_points(
    pool: &SqlitePool,
    club: &Club,
    species_name: &str,
    overrides: &OverrideRepository<'_>,
) -> Result<(i64, bool, bool)> {
    let name = ScientificName::new(species_name);
    let genus = name
        .genus()
        .ok_or_else(|| StorageError::GenusUnresolvable(species_name.to_string()))?;

    match overrides.find_genus_override(club.club_id, genus).await? {
        OverrideLookup::Ambiguous(_) => Err(StorageError::DuplicateOverride {
            level: OverrideLevel::Genus,
            key: genus.to_string(),
        }),
        OverrideLookup::One(row) => Ok((row.points, false, false)),
        OverrideLookup::None => {
            // Check-then-act: a concurrent resolution of the same genus can
            // also observe none and insert. The duplicate pair is reported
            // as Ambiguous on the next lookup, not prevented here.
            let species_count = CatalogRepository::new(pool).count_in_genus(genus).await?;
            let override_count = overrides
                .count_species_overrides_in_genus(club.club_id, genus)
                .await?;

            overrides
                .create_genus_override(
                    club.club_id,
                    genus,
                    Some(species_name),
                    club.default_points,
                    species_count,
                    override_count,
                )
                .await?;

            tracing::info!(
                club_id = %club.club_id,
                genus,
                points = club.default_points,
                "Auto-created genus override at club default, pending admin tuning"
            );

            Ok((club.default_points, true, true))
        }
    }
}
