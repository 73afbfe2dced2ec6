use super::*;

/// Tests creating an event with all fields set.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let tag = factory::tag::create_tag(db).await?;
    let event_time = Utc::now() + Duration::days(2);

    let repo = EventRepository::new(db);
    let event = repo
        .create(CreateEventParams {
            creator_id: user.id,
            server_id: server.id,
            tag_id: tag.id,
            title: "Crocodyl dungeon run".to_string(),
            description: Some("Bring your own bread".to_string()),
            event_time,
            max_slots: Some(4),
        })
        .await?;

    assert_eq!(event.creator_id, user.id);
    assert_eq!(event.title, "Crocodyl dungeon run");
    assert_eq!(event.description.as_deref(), Some("Bring your own bread"));
    assert_eq!(event.max_slots, Some(4));

    let found = repo.find_by_id(event.id).await?;
    assert_eq!(found.map(|e| e.id), Some(event.id));

    Ok(())
}

/// Tests deleting an event.
///
/// Expected: Ok(true) and the event is gone
#[tokio::test]
async fn deletes_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let repo = EventRepository::new(db);
    assert!(repo.delete(event.id).await?);
    assert!(repo.find_by_id(event.id).await?.is_none());
    assert!(!repo.delete(event.id).await?);

    Ok(())
}
