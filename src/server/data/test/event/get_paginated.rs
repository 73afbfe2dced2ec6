use super::*;

/// Tests that past events are excluded from listings.
///
/// Expected: Ok with only the upcoming event
#[tokio::test]
async fn excludes_past_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    factory::event::EventFactory::new(db, user.id, server.id, tag.id)
        .event_time(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let upcoming = factory::event::EventFactory::new(db, user.id, server.id, tag.id)
        .event_time(Utc::now() + Duration::hours(1))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, total) = repo.get_paginated(EventFilter::default(), 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, upcoming.id);

    Ok(())
}

/// Tests that events are ordered by event time, soonest first.
///
/// Expected: Ok with chronological ordering regardless of insert order
#[tokio::test]
async fn orders_by_event_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    let later = factory::event::EventFactory::new(db, user.id, server.id, tag.id)
        .event_time(Utc::now() + Duration::days(3))
        .build()
        .await?;
    let sooner = factory::event::EventFactory::new(db, user.id, server.id, tag.id)
        .event_time(Utc::now() + Duration::days(1))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (events, _) = repo.get_paginated(EventFilter::default(), 0, 10).await?;

    assert_eq!(events[0].id, sooner.id);
    assert_eq!(events[1].id, later.id);

    Ok(())
}

/// Tests filtering events by server and by tag.
///
/// Expected: Ok with only matching events returned
#[tokio::test]
async fn filters_by_server_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server_a = factory::server::create_server(db).await?;
    let server_b = factory::server::create_server(db).await?;
    let tag_dungeon = factory::tag::create_tag(db).await?;
    let tag_pvp = factory::tag::create_tag(db).await?;

    let on_a = factory::event::create_event(db, user.id, server_a.id, tag_dungeon.id).await?;
    factory::event::create_event(db, user.id, server_b.id, tag_dungeon.id).await?;
    factory::event::create_event(db, user.id, server_a.id, tag_pvp.id).await?;

    let repo = EventRepository::new(db);

    let (by_server, total) = repo
        .get_paginated(
            EventFilter {
                server_id: Some(server_a.id),
                tag_id: None,
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    assert!(by_server.iter().all(|e| e.server_id == server_a.id));

    let (by_both, total) = repo
        .get_paginated(
            EventFilter {
                server_id: Some(server_a.id),
                tag_id: Some(tag_dungeon.id),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(by_both[0].id, on_a.id);

    Ok(())
}
