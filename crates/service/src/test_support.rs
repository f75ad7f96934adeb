#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_in_memory, migrate};

/// Fresh, migrated in-memory database private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_in_memory().await?;
    migrate(&db).await?;
    Ok(db)
}
