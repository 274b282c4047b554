use std::collections::BTreeMap;

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::LeaderboardEntry;
use crate::repository::leaderboard::LeaderboardRepository;
use crate::repository::submissions::SubmissionRepository;

#[derive(Default)]
struct MemberTotals {
    species_count: i64,
    conservation_species_count: i64,
    points: i64,
}

/// Rebuilds the leaderboard for (club, period) from approved submissions.
///
/// Full recompute, idempotent: reset existing counters, rebuild per-member
/// totals, prune zero-point entries, return the standings ordered by
/// points descending (member id breaks ties). The reset-rebuild-prune
/// order is load-bearing; reordering leaves stale entries for members
/// whose approvals were all withdrawn since the last run.
pub async fn recompute_leaderboard(
    pool: &SqlitePool,
    club_id: Uuid,
    period: i64,
) -> Result<Vec<LeaderboardEntry>> {
    let board = LeaderboardRepository::new(pool);
    let submissions = SubmissionRepository::new(pool);

    board.reset_counters(club_id, period).await?;

    let approved = submissions.list_approved(club_id, period).await?;

    let mut totals: BTreeMap<Uuid, MemberTotals> = BTreeMap::new();
    for submission in &approved {
        let entry = totals.entry(submission.member_id).or_default();
        entry.species_count += 1;
        if submission.conservation_applied {
            entry.conservation_species_count += 1;
        }
        entry.points += submission.points;
    }

    for (member_id, member_totals) in &totals {
        board
            .upsert_totals(
                club_id,
                *member_id,
                period,
                member_totals.species_count,
                member_totals.conservation_species_count,
                member_totals.points,
            )
            .await?;
    }

    let pruned = board.prune_zero(club_id, period).await?;

    tracing::info!(
        %club_id,
        period,
        approved = approved.len(),
        members = totals.len(),
        pruned,
        "Recomputed leaderboard"
    );

    board.list_entries(club_id, period).await
}
