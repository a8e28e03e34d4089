use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Meal record in the database. `user_id` is a plain column, not an
/// enforced foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Meal {
    pub async fn create(
        db: &SqlitePool,
        user_id: i64,
        name: &str,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fats: f64,
    ) -> Result<Meal, sqlx::Error> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (user_id, name, calories, proteins, carbs, fats)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, calories, proteins, carbs, fats
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(calories)
        .bind(proteins)
        .bind(carbs)
        .bind(fats)
        .fetch_one(db)
        .await?;
        Ok(meal)
    }

    /// All meals, every owner.
    pub async fn list_all(db: &SqlitePool) -> Result<Vec<Meal>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, user_id, name, calories, proteins, carbs, fats
            FROM meals
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
