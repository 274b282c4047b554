use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    /// Program year; defaults to the current year.
    pub period: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MemberInfo {
    pub member_id: Uuid,
    pub display_name: String,
}

/// One ranked leaderboard row for display.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingRow {
    pub rank: i64,
    pub member: MemberInfo,
    pub species_count: i64,
    pub conservation_species_count: i64,
    pub points: i64,
}
