use super::*;

/// Tests paginating users across multiple pages.
///
/// Verifies that the repository returns the page contents and the total
/// number of users, not the page size.
///
/// Expected: Ok with 2 users on page 0, 1 on page 1, total 3
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (page0, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(page0.len(), 2);
    assert_eq!(total, 3);

    let (page1, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(page1.len(), 1);

    Ok(())
}

/// Tests paginating when no users exist.
///
/// Expected: Ok with empty page and total 0
#[tokio::test]
async fn returns_empty_page_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
