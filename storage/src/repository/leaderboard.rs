use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::dto::leaderboard::{MemberInfo, StandingRow};
use crate::error::Result;
use crate::models::LeaderboardEntry;

const ENTRY_COLUMNS: &str = "entry_id, club_id, member_id, period, species_count, \
                             conservation_species_count, points, updated_at";

#[derive(FromRow)]
struct StandingDbRow {
    member_id: Uuid,
    display_name: String,
    species_count: i64,
    conservation_species_count: i64,
    points: i64,
}

/// Persistence for derived leaderboard rows. All writes here happen inside
/// an aggregation run; nothing is patched incrementally.
pub struct LeaderboardRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Zeroes every existing entry for (club, period) so members with no
    /// remaining approved submissions fall out at the prune step.
    pub async fn reset_counters(&self, club_id: Uuid, period: i64) -> Result<()> {
        sqlx::query(
            "UPDATE leaderboard_entries \
             SET species_count = 0, conservation_species_count = 0, points = 0, updated_at = ? \
             WHERE club_id = ? AND period = ?",
        )
        .bind(chrono::Utc::now().naive_utc())
        .bind(club_id)
        .bind(period)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Get-or-create plus set, keyed on the (club, member, period) unique
    /// constraint.
    pub async fn upsert_totals(
        &self,
        club_id: Uuid,
        member_id: Uuid,
        period: i64,
        species_count: i64,
        conservation_species_count: i64,
        points: i64,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO leaderboard_entries (entry_id, club_id, member_id, period, \
             species_count, conservation_species_count, points, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT (club_id, member_id, period) DO UPDATE SET \
             species_count = excluded.species_count, \
             conservation_species_count = excluded.conservation_species_count, \
             points = excluded.points, \
             updated_at = excluded.updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(club_id)
        .bind(member_id)
        .bind(period)
        .bind(species_count)
        .bind(conservation_species_count)
        .bind(points)
        .bind(chrono::Utc::now().naive_utc())
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn prune_zero(&self, club_id: Uuid, period: i64) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM leaderboard_entries WHERE club_id = ? AND period = ? AND points = 0",
        )
        .bind(club_id)
        .bind(period)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Entries for (club, period), points descending, member id as the
    /// deterministic tie-break.
    pub async fn list_entries(&self, club_id: Uuid, period: i64) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM leaderboard_entries \
             WHERE club_id = ? AND period = ? ORDER BY points DESC, member_id"
        ))
        .bind(club_id)
        .bind(period)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Display standings with member names and dense 1-based ranks.
    pub async fn list_standings(&self, club_id: Uuid, period: i64) -> Result<Vec<StandingRow>> {
        let rows = sqlx::query_as::<_, StandingDbRow>(
            "SELECT e.member_id, m.display_name, e.species_count, \
             e.conservation_species_count, e.points \
             FROM leaderboard_entries e \
             INNER JOIN members m ON m.member_id = e.member_id \
             WHERE e.club_id = ? AND e.period = ? \
             ORDER BY e.points DESC, e.member_id",
        )
        .bind(club_id)
        .bind(period)
        .fetch_all(self.pool)
        .await?;

        let standings = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| StandingRow {
                rank: i as i64 + 1,
                member: MemberInfo {
                    member_id: row.member_id,
                    display_name: row.display_name,
                },
                species_count: row.species_count,
                conservation_species_count: row.conservation_species_count,
                points: row.points,
            })
            .collect();

        Ok(standings)
    }
}
