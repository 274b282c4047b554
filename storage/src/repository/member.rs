use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Member;

pub struct MemberRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MemberRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT member_id, display_name, email, created_at FROM members ORDER BY display_name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    pub async fn find_by_id(&self, member_id: Uuid) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT member_id, display_name, email, created_at FROM members WHERE member_id = ?",
        )
        .bind(member_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    pub async fn create(&self, display_name: &str, email: Option<&str>) -> Result<Member> {
        let member = Member {
            member_id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            email: email.map(String::from),
            created_at: chrono::Utc::now().naive_utc(),
        };

        sqlx::query(
            "INSERT INTO members (member_id, display_name, email, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(member.member_id)
        .bind(&member.display_name)
        .bind(&member.email)
        .bind(member.created_at)
        .execute(self.pool)
        .await?;

        Ok(member)
    }
}
