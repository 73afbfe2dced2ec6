use super::*;

/// Tests creating a user with all fields set.
///
/// Verifies that the repository stores the username, email, password hash,
/// and admin flag, and assigns an auto-incremented id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "kara".to_string(),
            email: "kara@example.com".to_string(),
            password_hash: "hash".to_string(),
            admin: true,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "kara");
    assert_eq!(user.email, "kara@example.com");
    assert!(user.admin);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests that duplicate usernames are rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "kara".to_string(),
        email: "kara@example.com".to_string(),
        password_hash: "hash".to_string(),
        admin: false,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "kara".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
