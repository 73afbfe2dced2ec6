use super::*;
use entity::prelude::{Breed, Server, Tag};

/// Tests creating a server and finding it by name.
///
/// Expected: Ok with server created and findable
#[tokio::test]
async fn creates_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Server).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let server = repo.create("Draconiros".to_string()).await?;

    assert_eq!(server.name, "Draconiros");
    assert_eq!(repo.count().await?, 1);

    let found = repo.find_by_name("Draconiros").await?;
    assert_eq!(found.map(|s| s.id), Some(server.id));

    Ok(())
}

/// Tests that duplicate server names are rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_server_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Server).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    repo.create("Draconiros".to_string()).await?;

    let result = repo.create("Draconiros".to_string()).await;
    assert!(result.is_err());

    Ok(())
}

/// Tests creating breeds and tags.
///
/// Expected: Ok with both rows created
#[tokio::test]
async fn creates_breed_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Breed)
        .with_table(Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let breed = BreedRepository::new(db).create("Iop".to_string()).await?;
    assert_eq!(breed.name, "Iop");

    let tag = TagRepository::new(db).create("Dungeon".to_string()).await?;
    assert_eq!(tag.name, "Dungeon");

    Ok(())
}
