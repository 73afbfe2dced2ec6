use super::*;

/// Tests creating a character with all fields set.
///
/// Expected: Ok with character linked to its owner, server, and breed
#[tokio::test]
async fn creates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let breed = factory::breed::create_breed(db).await?;

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams {
            user_id: user.id,
            server_id: server.id,
            breed_id: breed.id,
            name: "Kara-Iop".to_string(),
            level: 180,
        })
        .await?;

    assert_eq!(character.user_id, user.id);
    assert_eq!(character.server_id, server.id);
    assert_eq!(character.breed_id, breed.id);
    assert_eq!(character.name, "Kara-Iop");
    assert_eq!(character.level, 180);

    Ok(())
}

/// Tests deleting a character.
///
/// Expected: Ok(true) and the character is gone
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, _, character) = factory::helpers::create_character_for_user(db, &user).await?;

    let repo = CharacterRepository::new(db);
    assert!(repo.delete(character.id).await?);
    assert!(repo.find_by_id(character.id).await?.is_none());

    Ok(())
}
