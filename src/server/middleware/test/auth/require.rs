use super::*;

/// Tests a valid token for an existing user with no required permissions.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let config = test_config();
    let token = generate_access_token(user.id, &config)?;
    let jar = jar_with_token(&token);

    let guard = AuthGuard::new(db, &config, &jar);
    let authenticated = guard.require(&[]).await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests a request with no access-token cookie.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = test_config();
    let jar = CookieJar::new();

    let guard = AuthGuard::new(db, &config, &jar);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let other_config = TokenConfig::new("other-secret".to_string(), 15, 7);
    let token = generate_access_token(user.id, &other_config)?;
    let jar = jar_with_token(&token);

    let config = test_config();
    let guard = AuthGuard::new(db, &config, &jar);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = test_config();
    let token = generate_access_token(999, &config)?;
    let jar = jar_with_token(&token);

    let guard = AuthGuard::new(db, &config, &jar);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests admin permission enforcement for both admin and regular users.
///
/// Expected: Ok for the admin, Err(AuthError::AccessDenied) for the regular
/// user
#[tokio::test]
async fn enforces_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    let regular = factory::user::create_user(db).await.unwrap();

    let config = test_config();

    let admin_jar = jar_with_token(&generate_access_token(admin.id, &config)?);
    let guard = AuthGuard::new(db, &config, &admin_jar);
    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    let regular_jar = jar_with_token(&generate_access_token(regular.id, &config)?);
    let guard = AuthGuard::new(db, &config, &regular_jar);
    let result = guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
