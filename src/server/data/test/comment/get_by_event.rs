use super::*;

/// Tests that comments are returned oldest first with their authors.
///
/// Expected: Ok with chronological ordering and the author model attached
#[tokio::test]
async fn orders_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let first =
        factory::comment::create_comment_with_content(db, event.id, user.id, "first").await?;
    let second =
        factory::comment::create_comment_with_content(db, event.id, user.id, "second").await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_event(event.id).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].0.id, first.id);
    assert_eq!(comments[1].0.id, second.id);
    assert_eq!(comments[0].1.as_ref().map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that comments are scoped to their event.
///
/// Expected: Ok with an empty list for the other event
#[tokio::test]
async fn scopes_comments_to_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, server, tag, event_a) = factory::helpers::create_event_with_dependencies(db).await?;
    let event_b = factory::event::create_event(db, user.id, server.id, tag.id).await?;

    factory::comment::create_comment(db, event_a.id, user.id).await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.get_by_event(event_a.id).await?.len(), 1);
    assert!(repo.get_by_event(event_b.id).await?.is_empty());

    Ok(())
}
