use storage::Database;
use storage::dto::catalog::CreateSpeciesRequest;
use storage::dto::club::CreateClubRequest;
use storage::dto::submission::CreateSubmissionRequest;
use storage::error::{OverrideLevel, StorageError};
use storage::models::{Club, Member, Submission, SubmissionStatus};
use storage::repository::catalog::CatalogRepository;
use storage::repository::club::ClubRepository;
use storage::repository::leaderboard::LeaderboardRepository;
use storage::repository::member::MemberRepository;
use storage::repository::overrides::{OverrideLookup, OverrideRepository};
use storage::repository::submissions::SubmissionRepository;
use storage::services::aggregation::recompute_leaderboard;
use storage::services::backfill::backfill_genus_overrides;
use storage::services::resolution::{Resolution, resolve_points};
use uuid::Uuid;

const PERIOD: i64 = 2026;

async fn test_db() -> Database {
    let db = Database::in_memory().await.expect("open in-memory db");
    db.run_migrations().await.expect("run migrations");
    db
}

async fn seed_club(db: &Database, default_points: i64, conservation_multiplier: i64) -> Club {
    ClubRepository::new(db.pool())
        .create(&CreateClubRequest {
            name: "Test Aquarium Society".to_string(),
            default_points,
            conservation_multiplier,
            program_start: None,
            program_end: None,
        })
        .await
        .expect("create club")
}

async fn seed_member(db: &Database, display_name: &str) -> Member {
    MemberRepository::new(db.pool())
        .create(display_name, None)
        .await
        .expect("create member")
}

async fn seed_species(db: &Database, scientific_name: &str, conservation: bool) {
    CatalogRepository::new(db.pool())
        .create(&CreateSpeciesRequest {
            scientific_name: scientific_name.to_string(),
            common_name: None,
            is_conservation_priority: conservation,
        })
        .await
        .expect("create catalog species");
}

/// Resolve-then-persist, the way the web layer drives the engine.
async fn submit(
    db: &Database,
    club: &Club,
    member: &Member,
    specimen_id: Uuid,
    species_name: &str,
) -> Result<(Submission, Resolution), StorageError> {
    let flagged = CatalogRepository::new(db.pool())
        .find_by_name(species_name)
        .await?
        .map(|s| s.is_conservation_priority)
        .unwrap_or(false);

    let resolution = resolve_points(db.pool(), club, species_name, flagged).await?;

    let submission = SubmissionRepository::new(db.pool())
        .create(
            &CreateSubmissionRequest {
                club_id: club.club_id,
                member_id: member.member_id,
                specimen_id,
                species_name: species_name.to_string(),
                period: Some(PERIOD),
                notes: None,
            },
            PERIOD,
            &resolution,
        )
        .await?;

    Ok((submission, resolution))
}

#[tokio::test]
async fn species_override_takes_precedence_over_genus() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    overrides
        .create_genus_override(club.club_id, "Betta", None, 5, 0, 0)
        .await
        .unwrap();
    overrides
        .create_species_override(club.club_id, "Betta splendens", 25)
        .await
        .unwrap();

    let resolution = resolve_points(db.pool(), &club, "Betta splendens", false)
        .await
        .unwrap();

    assert_eq!(resolution.points, 25);
    assert!(!resolution.genus_created);
    assert!(!resolution.needs_review);
}

#[tokio::test]
async fn zero_point_species_override_is_treated_as_unset() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    overrides
        .create_species_override(club.club_id, "Betta splendens", 0)
        .await
        .unwrap();
    overrides
        .create_genus_override(club.club_id, "Betta", None, 7, 0, 0)
        .await
        .unwrap();

    let resolution = resolve_points(db.pool(), &club, "Betta splendens", false)
        .await
        .unwrap();

    assert_eq!(resolution.points, 7);
}

#[tokio::test]
async fn fallback_creates_exactly_one_genus_override_at_club_default() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    let resolution = resolve_points(db.pool(), &club, "Betta splendens", false)
        .await
        .unwrap();

    assert_eq!(resolution.points, 10);
    assert!(resolution.genus_created);
    assert!(resolution.needs_review);

    let rows = overrides.list_genus_overrides(club.club_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].genus_name, "Betta");
    assert_eq!(rows[0].points, 10);
    assert_eq!(rows[0].example_species.as_deref(), Some("Betta splendens"));

    // The second resolution reuses the stored row.
    let second = resolve_points(db.pool(), &club, "Betta imbellis", false)
        .await
        .unwrap();
    assert_eq!(second.points, 10);
    assert!(!second.genus_created);
    assert!(!second.needs_review);
    assert_eq!(
        overrides
            .list_genus_overrides(club.club_id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn conservation_multiplier_applies_only_when_flagged() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 3).await;
    OverrideRepository::new(db.pool())
        .create_genus_override(club.club_id, "Betta", None, 8, 0, 0)
        .await
        .unwrap();

    let flagged = resolve_points(db.pool(), &club, "Betta splendens", true)
        .await
        .unwrap();
    assert_eq!(flagged.points, 24);
    assert!(flagged.conservation_applied);

    let plain = resolve_points(db.pool(), &club, "Betta splendens", false)
        .await
        .unwrap();
    assert_eq!(plain.points, 8);
    assert!(!plain.conservation_applied);
}

#[tokio::test]
async fn mononomial_species_name_is_unresolvable() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;

    let err = resolve_points(db.pool(), &club, "Ancistrus", false)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::GenusUnresolvable(_)));
}

#[tokio::test]
async fn duplicate_override_rows_block_resolution() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    // The lazy-creation race can leave two rows for the same genus; the
    // store reports ambiguity and the resolver refuses to pick one.
    overrides
        .create_genus_override(club.club_id, "Betta", None, 5, 0, 0)
        .await
        .unwrap();
    overrides
        .create_genus_override(club.club_id, "Betta", None, 9, 0, 0)
        .await
        .unwrap();

    assert!(matches!(
        overrides
            .find_genus_override(club.club_id, "Betta")
            .await
            .unwrap(),
        OverrideLookup::Ambiguous(2)
    ));

    let err = resolve_points(db.pool(), &club, "Betta splendens", false)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::DuplicateOverride {
            level: OverrideLevel::Genus,
            ..
        }
    ));

    overrides
        .create_species_override(club.club_id, "Corydoras panda", 12)
        .await
        .unwrap();
    overrides
        .create_species_override(club.club_id, "Corydoras panda", 15)
        .await
        .unwrap();

    let err = resolve_points(db.pool(), &club, "Corydoras panda", false)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::DuplicateOverride {
            level: OverrideLevel::Species,
            ..
        }
    ));
}

#[tokio::test]
async fn submission_snapshot_survives_override_edits() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let member = seed_member(&db, "Alice").await;
    let overrides = OverrideRepository::new(db.pool());
    let submissions = SubmissionRepository::new(db.pool());

    let genus = overrides
        .create_genus_override(club.club_id, "Betta", None, 8, 0, 0)
        .await
        .unwrap();

    let (submission, _) = submit(&db, &club, &member, Uuid::new_v4(), "Betta splendens")
        .await
        .unwrap();
    assert_eq!(submission.points, 8);

    overrides
        .update_genus_points(genus.override_id, 50)
        .await
        .unwrap();

    let reloaded = submissions
        .find_by_id(submission.submission_id)
        .await
        .unwrap();
    assert_eq!(reloaded.points, 8);
}

#[tokio::test]
async fn duplicate_submission_is_rejected_until_declined() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let member = seed_member(&db, "Alice").await;
    let submissions = SubmissionRepository::new(db.pool());
    let specimen_id = Uuid::new_v4();

    let (first, _) = submit(&db, &club, &member, specimen_id, "Betta splendens")
        .await
        .unwrap();

    let err = submit(&db, &club, &member, specimen_id, "Betta splendens")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::DuplicateSubmission));

    // A declined claim frees the specimen slot.
    submissions.decline(first.submission_id).await.unwrap();
    submit(&db, &club, &member, specimen_id, "Betta splendens")
        .await
        .unwrap();
}

#[tokio::test]
async fn admin_point_override_at_approval_replaces_snapshot_locally() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let member = seed_member(&db, "Alice").await;
    let overrides = OverrideRepository::new(db.pool());
    let submissions = SubmissionRepository::new(db.pool());

    let (submission, _) = submit(&db, &club, &member, Uuid::new_v4(), "Betta splendens")
        .await
        .unwrap();
    assert_eq!(submission.points, 10);

    let approved = submissions
        .approve(submission.submission_id, Some(15))
        .await
        .unwrap();
    assert_eq!(approved.status, SubmissionStatus::Approved);
    assert_eq!(approved.points, 15);

    // Local to the submission: the auto-created genus override keeps the
    // club default.
    let rows = overrides.list_genus_overrides(club.club_id).await.unwrap();
    assert_eq!(rows[0].points, 10);
}

#[tokio::test]
async fn invalid_status_transitions_are_rejected() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let member = seed_member(&db, "Alice").await;
    let submissions = SubmissionRepository::new(db.pool());

    let (submission, _) = submit(&db, &club, &member, Uuid::new_v4(), "Betta splendens")
        .await
        .unwrap();

    // Open cannot close or resubmit.
    assert!(matches!(
        submissions.close(submission.submission_id).await.unwrap_err(),
        StorageError::ConstraintViolation(_)
    ));
    assert!(matches!(
        submissions
            .resubmit(submission.submission_id)
            .await
            .unwrap_err(),
        StorageError::ConstraintViolation(_)
    ));

    submissions
        .approve(submission.submission_id, None)
        .await
        .unwrap();
    assert!(matches!(
        submissions
            .decline(submission.submission_id)
            .await
            .unwrap_err(),
        StorageError::ConstraintViolation(_)
    ));
    submissions.close(submission.submission_id).await.unwrap();
}

#[tokio::test]
async fn recompute_is_idempotent() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let alice = seed_member(&db, "Alice").await;
    let bob = seed_member(&db, "Bob").await;
    let submissions = SubmissionRepository::new(db.pool());

    for (member, species) in [
        (&alice, "Betta splendens"),
        (&alice, "Corydoras panda"),
        (&bob, "Betta imbellis"),
    ] {
        let (submission, _) = submit(&db, &club, member, Uuid::new_v4(), species)
            .await
            .unwrap();
        submissions
            .approve(submission.submission_id, None)
            .await
            .unwrap();
    }

    let first = recompute_leaderboard(db.pool(), club.club_id, PERIOD)
        .await
        .unwrap();
    let second = recompute_leaderboard(db.pool(), club.club_id, PERIOD)
        .await
        .unwrap();

    // entry_id is part of the key: recompute updates rows in place
    // instead of replacing them.
    let key = |entries: &[storage::models::LeaderboardEntry]| {
        entries
            .iter()
            .map(|e| {
                (
                    e.entry_id,
                    e.member_id,
                    e.species_count,
                    e.conservation_species_count,
                    e.points,
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(key(&first), key(&second));
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].points, 20);
    assert_eq!(first[0].species_count, 2);
}

#[tokio::test]
async fn zero_point_entries_are_pruned() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let member = seed_member(&db, "Alice").await;
    let submissions = SubmissionRepository::new(db.pool());

    let (submission, _) = submit(&db, &club, &member, Uuid::new_v4(), "Betta splendens")
        .await
        .unwrap();
    submissions
        .approve(submission.submission_id, None)
        .await
        .unwrap();

    let entries = recompute_leaderboard(db.pool(), club.club_id, PERIOD)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);

    // Withdraw the only approval: re-open, then decline.
    submissions
        .resubmit(submission.submission_id)
        .await
        .unwrap();
    submissions
        .decline(submission.submission_id)
        .await
        .unwrap();

    let entries = recompute_leaderboard(db.pool(), club.club_id, PERIOD)
        .await
        .unwrap();
    assert!(entries.is_empty());

    let board = LeaderboardRepository::new(db.pool());
    assert!(
        board
            .list_entries(club.club_id, PERIOD)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn standings_break_point_ties_by_member_id() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let alice = seed_member(&db, "Alice").await;
    let bob = seed_member(&db, "Bob").await;
    let submissions = SubmissionRepository::new(db.pool());

    for member in [&alice, &bob] {
        let (submission, _) = submit(&db, &club, member, Uuid::new_v4(), "Betta splendens")
            .await
            .unwrap();
        submissions
            .approve(submission.submission_id, None)
            .await
            .unwrap();
    }

    let entries = recompute_leaderboard(db.pool(), club.club_id, PERIOD)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].points, entries[1].points);
    assert!(entries[0].member_id < entries[1].member_id);
}

#[tokio::test]
async fn backfill_creates_one_override_per_unique_genus() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    seed_species(&db, "Betta splendens", false).await;
    seed_species(&db, "Betta imbellis", false).await;
    seed_species(&db, "Corydoras panda", false).await;
    seed_species(&db, "Ancistrus", false).await; // no genus token, skipped

    let created = backfill_genus_overrides(db.pool(), &club).await.unwrap();
    assert_eq!(created, 2);

    let rows = overrides.list_genus_overrides(club.club_id).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].genus_name, "Betta");
    assert_eq!(rows[0].points, 10);
    assert_eq!(rows[0].species_count, 2);
    assert_eq!(rows[1].genus_name, "Corydoras");
    assert_eq!(rows[1].species_count, 1);

    // Gated on zero rows: a second run creates nothing.
    let created = backfill_genus_overrides(db.pool(), &club).await.unwrap();
    assert_eq!(created, 0);
    assert_eq!(
        overrides
            .list_genus_overrides(club.club_id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn genus_counters_match_recount_for_case_variant_genera() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    // "Betta" and "betta" are distinct genera; neither count may bleed
    // into the other through case folding.
    seed_species(&db, "Betta splendens", false).await;
    seed_species(&db, "betta unimaculata", false).await;

    let created = backfill_genus_overrides(db.pool(), &club).await.unwrap();
    assert_eq!(created, 2);

    let rows = overrides.list_genus_overrides(club.club_id).await.unwrap();
    for row in rows {
        assert_eq!(row.species_count, 1, "genus '{}'", row.genus_name);

        let recounted = overrides
            .recount_genus_counters(club.club_id, &row.genus_name)
            .await
            .unwrap();
        assert_eq!(recounted.species_count, row.species_count);
    }
}

#[tokio::test]
async fn duplicate_catalog_species_is_a_constraint_violation() {
    let db = test_db().await;
    let catalog = CatalogRepository::new(db.pool());

    let request = CreateSpeciesRequest {
        scientific_name: "Betta splendens".to_string(),
        common_name: None,
        is_conservation_priority: false,
    };
    catalog.create(&request).await.unwrap();

    let err = catalog.create(&request).await.unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[tokio::test]
async fn recount_refreshes_cached_counters_from_source() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let overrides = OverrideRepository::new(db.pool());

    seed_species(&db, "Betta splendens", false).await;
    let genus = overrides
        .create_genus_override(club.club_id, "Betta", None, 8, 0, 0)
        .await
        .unwrap();
    assert_eq!(genus.species_count, 0);

    seed_species(&db, "Betta imbellis", false).await;
    overrides
        .create_species_override(club.club_id, "Betta splendens", 12)
        .await
        .unwrap();

    let recounted = overrides
        .recount_genus_counters(club.club_id, "Betta")
        .await
        .unwrap();
    assert_eq!(recounted.species_count, 2);
    assert_eq!(recounted.override_count, 1);
}

#[tokio::test]
async fn worked_example_aulonocara() {
    let db = test_db().await;
    let club = seed_club(&db, 10, 2).await;
    let member = seed_member(&db, "M").await;
    let overrides = OverrideRepository::new(db.pool());
    let submissions = SubmissionRepository::new(db.pool());

    seed_species(&db, "Aulonocara jacobfreibergi", true).await;

    let (submission, resolution) = submit(
        &db,
        &club,
        &member,
        Uuid::new_v4(),
        "Aulonocara jacobfreibergi",
    )
    .await
    .unwrap();

    assert!(resolution.genus_created);
    assert!(resolution.needs_review);
    assert_eq!(submission.points, 20);
    assert!(submission.conservation_applied);

    let rows = overrides.list_genus_overrides(club.club_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].genus_name, "Aulonocara");
    assert_eq!(rows[0].points, 10);

    submissions
        .approve(submission.submission_id, None)
        .await
        .unwrap();

    let entries = recompute_leaderboard(db.pool(), club.club_id, PERIOD)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].member_id, member.member_id);
    assert_eq!(entries[0].species_count, 1);
    assert_eq!(entries[0].conservation_species_count, 1);
    assert_eq!(entries[0].points, 20);
}
