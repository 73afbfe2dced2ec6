use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{
        reference::{BreedRepository, ServerRepository, TagRepository},
        refresh_token::RefreshTokenRepository,
    },
    error::AppError,
};

const DEFAULT_SERVERS: &[&str] = &["Draconiros", "Imagiro", "Orukam", "TalKasha", "HellMina"];

const DEFAULT_BREEDS: &[&str] = &[
    "Cra", "Ecaflip", "Eliotrope", "Eniripsa", "Enutrof", "Feca", "Foggernaut", "Huppermage",
    "Iop", "Masqueraider", "Osamodas", "Ouginak", "Pandawa", "Rogue", "Sacrier", "Sadida",
    "Sram", "Xelor",
];

const DEFAULT_TAGS: &[&str] = &["Dungeon", "Farming", "PvP", "Quest", "Leveling"];

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the reference tables (servers, breeds, tags) with the default lists.
///
/// Each list is only inserted when its table is empty, so existing deployments
/// keep any names added or removed by an admin.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<(), AppError> {
    let servers = ServerRepository::new(db);
    if servers.count().await? == 0 {
        for name in DEFAULT_SERVERS {
            servers.create(name.to_string()).await?;
        }
        tracing::info!("Seeded {} default servers", DEFAULT_SERVERS.len());
    }

    let breeds = BreedRepository::new(db);
    if breeds.count().await? == 0 {
        for name in DEFAULT_BREEDS {
            breeds.create(name.to_string()).await?;
        }
        tracing::info!("Seeded {} default breeds", DEFAULT_BREEDS.len());
    }

    let tags = TagRepository::new(db);
    if tags.count().await? == 0 {
        for name in DEFAULT_TAGS {
            tags.create(name.to_string()).await?;
        }
        tracing::info!("Seeded {} default tags", DEFAULT_TAGS.len());
    }

    Ok(())
}

/// Deletes refresh-token rows that can never authenticate again (expired or
/// revoked). Rotation revokes a row on every refresh, so without this sweep
/// the table grows with every session ever opened.
pub async fn purge_stale_sessions(db: &DatabaseConnection) -> Result<(), AppError> {
    let removed = RefreshTokenRepository::new(db).delete_stale().await?;

    if removed > 0 {
        tracing::info!("Purged {} stale refresh tokens", removed);
    }

    Ok(())
}
