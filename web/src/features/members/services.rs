use sqlx::SqlitePool;
use storage::{
    dto::member::CreateMemberRequest, error::Result, models::Member,
    repository::member::MemberRepository,
};

/// List all members
pub async fn list_members(pool: &SqlitePool) -> Result<Vec<Member>> {
    let repo = MemberRepository::new(pool);
    repo.list().await
}

/// Register a member
pub async fn create_member(pool: &SqlitePool, request: &CreateMemberRequest) -> Result<Member> {
    let repo = MemberRepository::new(pool);
    repo.create(&request.display_name, request.email.as_deref())
        .await
}
