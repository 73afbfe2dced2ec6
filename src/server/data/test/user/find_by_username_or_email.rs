use super::*;

/// Tests finding a user by username when only the username matches.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("kara")
        .email("kara@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("kara", "nomatch@example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests finding a user by email when only the email matches.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("kara")
        .email("kara@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("nomatch", "kara@example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that no user is returned when neither field matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("nomatch", "nomatch@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
