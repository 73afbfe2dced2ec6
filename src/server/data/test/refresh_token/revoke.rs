use super::*;

/// Tests revoking a token that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RefreshTokenRepository::new(db);
    assert!(!repo.revoke("unknown").await?);

    Ok(())
}

/// Tests revoking all sessions for one user.
///
/// Verifies that another user's token stays live.
///
/// Expected: Ok(2) revoked, other user's token still valid
#[tokio::test]
async fn revokes_all_for_one_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    repo.create(user.id, "hash-1".to_string(), Utc::now() + Duration::days(7))
        .await?;
    repo.create(user.id, "hash-2".to_string(), Utc::now() + Duration::days(7))
        .await?;
    repo.create(
        other.id,
        "hash-other".to_string(),
        Utc::now() + Duration::days(7),
    )
    .await?;

    let revoked = repo.revoke_all_for_user(user.id).await?;
    assert_eq!(revoked, 2);

    assert!(repo.find_valid_by_hash("hash-1").await?.is_none());
    assert!(repo.find_valid_by_hash("hash-2").await?.is_none());
    assert!(repo.find_valid_by_hash("hash-other").await?.is_some());

    Ok(())
}

/// Tests purging expired and revoked rows.
///
/// Expected: Ok(2) deleted, live token untouched
#[tokio::test]
async fn deletes_stale_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    factory::refresh_token::create_expired_refresh_token(db, user.id).await?;
    repo.create(
        user.id,
        "hash-revoked".to_string(),
        Utc::now() + Duration::days(7),
    )
    .await?;
    repo.revoke("hash-revoked").await?;
    repo.create(
        user.id,
        "hash-live".to_string(),
        Utc::now() + Duration::days(7),
    )
    .await?;

    let deleted = repo.delete_stale().await?;
    assert_eq!(deleted, 2);

    assert!(repo.find_valid_by_hash("hash-live").await?.is_some());

    Ok(())
}
