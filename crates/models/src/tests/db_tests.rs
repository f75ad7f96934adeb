use crate::db::{connect_in_memory, connect_with_config, migrate, test_connection, DatabaseConfig};
use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

#[tokio::test]
async fn in_memory_connection_is_usable() -> Result<()> {
    let db = connect_in_memory().await?;
    test_connection(&db).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    Ok(())
}

#[tokio::test]
async fn connect_with_config_honours_url() -> Result<()> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 1, ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string()))
        .await?
        .expect("one row");
    let v: i32 = row.try_get("", "test")?;
    assert_eq!(v, 1);
    Ok(())
}

#[tokio::test]
async fn migrations_are_idempotent() -> Result<()> {
    let db = connect_in_memory().await?;
    migrate(&db).await?;
    migrate(&db).await?;
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'student'".to_string(),
        ))
        .await?
        .expect("one row");
    let n: i32 = row.try_get("", "n")?;
    assert_eq!(n, 1);
    Ok(())
}
