use sqlx::SqlitePool;
use storage::{
    dto::club::CreateClubRequest, error::Result, models::Club, repository::club::ClubRepository,
};
use uuid::Uuid;

/// List all clubs
pub async fn list_clubs(pool: &SqlitePool) -> Result<Vec<Club>> {
    let repo = ClubRepository::new(pool);
    repo.list().await
}

/// Get club by id
pub async fn get_club(pool: &SqlitePool, club_id: Uuid) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.find_by_id(club_id).await
}

/// Register a new club awards program
pub async fn create_club(pool: &SqlitePool, request: &CreateClubRequest) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.create(request).await
}
