use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .context("connect to database")?;

        ensure_schema(&db).await?;

        Ok(Self { db, config })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}

/// Creates the two tables on startup when they are absent. There is no
/// migration history; the schema is fixed.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            email           TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create users table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meals (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id  INTEGER NOT NULL,
            name     TEXT NOT NULL,
            calories REAL NOT NULL,
            proteins REAL NOT NULL,
            carbs    REAL NOT NULL,
            fats     REAL NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create meals table")?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::JwtConfig;

    /// In-memory pool capped at one connection so every query sees the same
    /// database.
    pub async fn test_db() -> SqlitePool {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        ensure_schema(&db).await.expect("schema bootstrap");
        db
    }

    pub async fn test_state() -> AppState {
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            cors_allowed_origins: "*".into(),
            jwt: JwtConfig {
                secret: "test-secret".into(),
                algorithm: jsonwebtoken::Algorithm::HS256,
                ttl_minutes: 30,
            },
        });
        AppState::from_parts(test_db().await, config)
    }
}
