use super::*;

/// Tests creating a comment on an event.
///
/// Expected: Ok with the comment stored
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            event_id: event.id,
            user_id: user.id,
            content: "I can tank with my Feca".to_string(),
        })
        .await?;

    assert_eq!(comment.event_id, event.id);
    assert_eq!(comment.user_id, user.id);
    assert_eq!(comment.content, "I can tank with my Feca");

    Ok(())
}

/// Tests deleting a comment.
///
/// Expected: Ok(true) and the comment is gone
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let comment = factory::comment::create_comment(db, event.id, user.id).await?;

    let repo = CommentRepository::new(db);
    assert!(repo.delete(comment.id).await?);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}
