use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user. The unique index on email makes the insert the
    /// uniqueness check; concurrent registrations of the same address race
    /// to a single winner inside the store.
    pub async fn create(
        db: &SqlitePool,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, hashed_password)
            VALUES ($1, $2)
            RETURNING id, email, hashed_password
            "#,
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// All users, hashes included.
    pub async fn list_all(db: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::state::test_support::test_db;

    #[tokio::test]
    async fn create_then_find_by_email() {
        let db = test_db().await;
        let created = User::create(&db, "a@example.com", "hash-a").await.unwrap();
        assert!(created.id > 0);

        let found = User::find_by_email(&db, "a@example.com")
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.hashed_password, "hash-a");

        assert!(User::find_by_email(&db, "nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let db = test_db().await;
        User::create(&db, "dup@example.com", "h1").await.unwrap();
        let err = User::create(&db, "dup@example.com", "h2").await.unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::EmailTaken));

        let users = User::list_all(&db).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].hashed_password, "h1");
    }

    #[tokio::test]
    async fn list_all_returns_every_row_in_id_order() {
        let db = test_db().await;
        User::create(&db, "first@example.com", "h1").await.unwrap();
        User::create(&db, "second@example.com", "h2").await.unwrap();

        let users = User::list_all(&db).await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].id < users[1].id);
        assert_eq!(users[0].email, "first@example.com");
    }
}
