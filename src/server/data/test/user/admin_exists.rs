use super::*;

/// Tests that admin_exists is false with only regular users.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests that admin_exists is true once an admin is present.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}
