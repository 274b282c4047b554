use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::club::CreateClubRequest;
use crate::error::{Result, StorageError};
use crate::models::Club;

const CLUB_COLUMNS: &str = "club_id, name, default_points, conservation_multiplier, \
                            program_start, program_end, created_at";

pub struct ClubRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Club>> {
        let clubs = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(clubs)
    }

    pub async fn find_by_id(&self, club_id: Uuid) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE club_id = ?"
        ))
        .bind(club_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    pub async fn create(&self, request: &CreateClubRequest) -> Result<Club> {
        let club = Club {
            club_id: Uuid::new_v4(),
            name: request.name.clone(),
            default_points: request.default_points,
            conservation_multiplier: request.conservation_multiplier,
            program_start: request.program_start,
            program_end: request.program_end,
            created_at: chrono::Utc::now().naive_utc(),
        };

        sqlx::query(
            "INSERT INTO clubs (club_id, name, default_points, conservation_multiplier, \
             program_start, program_end, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(club.club_id)
        .bind(&club.name)
        .bind(club.default_points)
        .bind(club.conservation_multiplier)
        .bind(club.program_start)
        .bind(club.program_end)
        .bind(club.created_at)
        .execute(self.pool)
        .await?;

        Ok(club)
    }
}
