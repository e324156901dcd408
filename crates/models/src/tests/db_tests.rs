use crate::db::{connect_in_memory, connect_with_config};
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, Statement};
use anyhow::Result;

/// In-memory database comes up migrated and empty
#[tokio::test]
async fn test_in_memory_connection_is_migrated() -> Result<()> {
    let db = connect_in_memory().await?;
    assert_eq!(crate::jersey::count(&db).await?, 0);
    Ok(())
}

/// Pool options from `[database]` are accepted by the driver
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&config).await?;
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}

/// Postgres round-trip, only when a server is configured
#[tokio::test]
async fn test_postgres_connection() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        println!("Skipping postgres test (DATABASE_URL not set)");
        return Ok(());
    }
    let db = crate::db::connect().await?;
    crate::db::migrate(&db).await?;
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}
