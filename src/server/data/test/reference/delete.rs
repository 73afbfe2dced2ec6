use super::*;
use entity::prelude::Tag;

/// Tests deleting an existing tag.
///
/// Expected: Ok(true) and the tag is gone
#[tokio::test]
async fn deletes_existing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    assert!(repo.delete(tag.id).await?);
    assert!(repo.find_by_id(tag.id).await?.is_none());

    Ok(())
}

/// Tests deleting a tag that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Tag).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    assert!(!repo.delete(999).await?);

    Ok(())
}
