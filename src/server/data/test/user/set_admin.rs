use super::*;

/// Tests granting and revoking the admin flag.
///
/// Expected: Ok with the flag toggled in the database
#[tokio::test]
async fn toggles_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    assert!(!user.admin);

    let repo = UserRepository::new(db);

    let promoted = repo.set_admin(user.id, true).await?;
    assert!(promoted.admin);

    let demoted = repo.set_admin(user.id, false).await?;
    assert!(!demoted.admin);

    Ok(())
}

/// Tests setting the admin flag on a missing user.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_admin(999, true).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
