use super::*;

/// Tests finding a character by its server and name pair.
///
/// Verifies that the same name on a different server is not matched, since
/// names are only unique per server.
///
/// Expected: Ok(Some) on the right server, Ok(None) on the other
#[tokio::test]
async fn matches_only_within_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let server_a = factory::server::create_server(db).await?;
    let server_b = factory::server::create_server(db).await?;
    let breed = factory::breed::create_breed(db).await?;

    let character = factory::character::CharacterFactory::new(db, user.id, server_a.id, breed.id)
        .name("Kara-Iop")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    let found = repo.find_by_server_and_name(server_a.id, "Kara-Iop").await?;
    assert_eq!(found.map(|c| c.id), Some(character.id));

    let other = repo.find_by_server_and_name(server_b.id, "Kara-Iop").await?;
    assert!(other.is_none());

    Ok(())
}
