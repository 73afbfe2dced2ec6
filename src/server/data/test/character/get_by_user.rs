use super::*;

/// Tests that only the requested user's characters are returned.
///
/// Expected: Ok with two characters for the owner, none of the other user's
#[tokio::test]
async fn scopes_characters_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let server = factory::server::create_server(db).await?;
    let breed = factory::breed::create_breed(db).await?;

    factory::character::create_character(db, owner.id, server.id, breed.id).await?;
    factory::character::create_character(db, owner.id, server.id, breed.id).await?;
    factory::character::create_character(db, other.id, server.id, breed.id).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_by_user(owner.id).await?;

    assert_eq!(characters.len(), 2);
    assert!(characters.iter().all(|c| c.user_id == owner.id));

    Ok(())
}
