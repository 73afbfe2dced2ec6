use super::*;
use entity::prelude::{Breed, Tag};

/// Tests looking up a breed by its exact name.
///
/// Expected: Some for an existing name, None otherwise
#[tokio::test]
async fn finds_breed_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Breed).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BreedRepository::new(db);
    let breed = repo.create("Iop".to_string()).await?;

    let found = repo.find_by_name("Iop").await?;
    assert_eq!(found.map(|b| b.id), Some(breed.id));

    assert!(repo.find_by_name("Eniripsa").await?.is_none());

    Ok(())
}

/// Tests looking up a tag by its exact name.
///
/// Expected: Some for an existing name, None otherwise
#[tokio::test]
async fn finds_tag_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo.create("Dungeon".to_string()).await?;

    let found = repo.find_by_name("Dungeon").await?;
    assert_eq!(found.map(|t| t.id), Some(tag.id));

    assert!(repo.find_by_name("PvP").await?.is_none());

    Ok(())
}
