use super::*;

/// Tests updating the title and clearing the description.
///
/// Verifies the two-level option semantics: `Some(None)` clears a nullable
/// field while `None` leaves it untouched.
///
/// Expected: Ok with title changed, description cleared, max_slots preserved
#[tokio::test]
async fn clears_nullable_fields_with_some_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let tag = factory::tag::create_tag(db).await?;
    let event = factory::event::EventFactory::new(db, user.id, server.id, tag.id)
        .title("Old title")
        .description("Old description")
        .max_slots(8)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                title: Some("New title".to_string()),
                event_time: None,
                description: Some(None),
                max_slots: None,
            },
        )
        .await?;

    assert_eq!(updated.title, "New title");
    assert!(updated.description.is_none());
    assert_eq!(updated.max_slots, Some(8));
    assert_eq!(updated.event_time, event.event_time);

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateEventParams {
                title: Some("Ghost".to_string()),
                event_time: None,
                description: None,
                max_slots: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
