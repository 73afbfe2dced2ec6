use super::*;

/// Tests finding a live token by its stored hash.
///
/// Expected: Ok(Some) with the matching record
#[tokio::test]
async fn finds_live_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    let token = repo
        .create(user.id, "hash-a".to_string(), Utc::now() + Duration::days(7))
        .await?;

    let found = repo.find_valid_by_hash("hash-a").await?;
    assert_eq!(found.map(|t| t.id), Some(token.id));

    Ok(())
}

/// Tests that expired tokens are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    repo.create(
        user.id,
        "hash-expired".to_string(),
        Utc::now() - Duration::minutes(1),
    )
    .await?;

    assert!(repo.find_valid_by_hash("hash-expired").await?.is_none());

    Ok(())
}

/// Tests that revoked tokens are not returned.
///
/// Expected: Ok(None) after revocation
#[tokio::test]
async fn ignores_revoked_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    repo.create(user.id, "hash-b".to_string(), Utc::now() + Duration::days(7))
        .await?;
    assert!(repo.revoke("hash-b").await?);

    assert!(repo.find_valid_by_hash("hash-b").await?.is_none());

    Ok(())
}
