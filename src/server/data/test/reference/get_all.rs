use super::*;
use entity::prelude::Server;

/// Tests that servers are returned ordered by name.
///
/// Expected: Ok with alphabetical ordering regardless of insert order
#[tokio::test]
async fn orders_servers_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Server).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::create_server_with_name(db, "Orukam").await?;
    factory::server::create_server_with_name(db, "Draconiros").await?;
    factory::server::create_server_with_name(db, "Imagiro").await?;

    let servers = ServerRepository::new(db).get_all().await?;
    let names: Vec<&str> = servers.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["Draconiros", "Imagiro", "Orukam"]);

    Ok(())
}

/// Tests listing when the table is empty.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Server).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let servers = ServerRepository::new(db).get_all().await?;
    assert!(servers.is_empty());

    Ok(())
}
