use super::*;

/// Tests adding a character to an event's team.
///
/// Expected: Ok with membership visible through is_character_joined and
/// team_count
#[tokio::test]
async fn adds_character_to_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (_, _, character) = factory::helpers::create_character_for_user(db, &user).await?;

    let repo = EventRepository::new(db);

    assert!(!repo.is_character_joined(event.id, character.id).await?);

    repo.add_character(event.id, character.id).await?;

    assert!(repo.is_character_joined(event.id, character.id).await?);
    assert_eq!(repo.team_count(event.id).await?, 1);

    Ok(())
}

/// Tests removing a character from an event's team.
///
/// Expected: Ok(true) on removal, Ok(false) when already gone
#[tokio::test]
async fn removes_character_from_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (_, _, character) = factory::helpers::create_character_for_user(db, &user).await?;

    let repo = EventRepository::new(db);
    repo.add_character(event.id, character.id).await?;

    assert!(repo.remove_character(event.id, character.id).await?);
    assert!(!repo.is_character_joined(event.id, character.id).await?);
    assert!(!repo.remove_character(event.id, character.id).await?);

    Ok(())
}

/// Tests loading the full team with character, breed, and owner rows.
///
/// Expected: Ok with one entry carrying the joined data
#[tokio::test]
async fn loads_team_with_breed_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (_, breed, character) = factory::helpers::create_character_for_user(db, &user).await?;

    let repo = EventRepository::new(db);
    repo.add_character(event.id, character.id).await?;

    let team = repo.get_team(event.id).await?;

    assert_eq!(team.len(), 1);
    let (team_character, team_breed, owner) = &team[0];
    assert_eq!(team_character.id, character.id);
    assert_eq!(team_breed.id, breed.id);
    assert_eq!(owner.id, user.id);

    Ok(())
}

/// Tests that team membership is scoped per event.
///
/// Expected: Ok with the character joined to one event only
#[tokio::test]
async fn membership_is_scoped_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, server, tag, event_a) = factory::helpers::create_event_with_dependencies(db).await?;
    let event_b = factory::event::create_event(db, user.id, server.id, tag.id).await?;
    let (_, _, character) = factory::helpers::create_character_for_user(db, &user).await?;

    let repo = EventRepository::new(db);
    repo.add_character(event_a.id, character.id).await?;

    assert!(repo.is_character_joined(event_a.id, character.id).await?);
    assert!(!repo.is_character_joined(event_b.id, character.id).await?);
    assert_eq!(repo.team_count(event_b.id).await?, 0);

    Ok(())
}
