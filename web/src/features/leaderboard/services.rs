use chrono::Datelike;
use sqlx::SqlitePool;
use storage::{
    dto::leaderboard::StandingRow, error::Result, models::LeaderboardEntry,
    repository::leaderboard::LeaderboardRepository, services::aggregation::recompute_leaderboard,
};
use uuid::Uuid;

pub fn default_period() -> i64 {
    chrono::Utc::now().year() as i64
}

/// Current stored standings; recomputation is explicit, not implied.
pub async fn get_standings(
    pool: &SqlitePool,
    club_id: Uuid,
    period: i64,
) -> Result<Vec<StandingRow>> {
    let repo = LeaderboardRepository::new(pool);
    repo.list_standings(club_id, period).await
}

/// Full rebuild of the (club, period) leaderboard from approved
/// submissions.
pub async fn recompute(
    pool: &SqlitePool,
    club_id: Uuid,
    period: i64,
) -> Result<Vec<LeaderboardEntry>> {
    recompute_leaderboard(pool, club_id, period).await
}
