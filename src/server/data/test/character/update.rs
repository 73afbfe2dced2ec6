use super::*;

/// Tests updating only the level, leaving the name untouched.
///
/// Expected: Ok with level changed and name preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let breed = factory::breed::create_breed(db).await?;
    let character = factory::character::CharacterFactory::new(db, user.id, server.id, breed.id)
        .name("Kara-Iop")
        .level(100)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let updated = repo
        .update(
            character.id,
            UpdateCharacterParams {
                name: None,
                level: Some(150),
            },
        )
        .await?;

    assert_eq!(updated.name, "Kara-Iop");
    assert_eq!(updated.level, 150);

    Ok(())
}

/// Tests updating a character that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateCharacterParams {
                name: Some("Ghost".to_string()),
                level: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
