//! Database configuration module.
//!
//! This module handles the `SQLite` connection backing local storage and creates the
//! `local_storage` table from its entity definition with `SeaORM`'s
//! `Schema::create_table_from_entity`, so the schema always matches the Rust model.

use crate::entities::LocalStorage;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Used when `DATABASE_URL` is not set. `mode=rwc` creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://rotate_cart.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to local storage database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `local_storage` table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut storage_table = schema.create_table_from_entity(LocalStorage);
    storage_table.if_not_exists();

    db.execute(builder.build(&storage_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::LocalStorageModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<LocalStorageModel> = LocalStorage::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
