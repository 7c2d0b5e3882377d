use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Expense record in the database. `user_id` is set at insert and never
/// changes; every visibility decision compares against it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

impl Expense {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, amount, category, description, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Looks up by id alone; the caller decides between not-found and
    /// wrong-owner.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, amount, category, description, created_at
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        amount: f64,
        category: &str,
        description: &str,
    ) -> anyhow::Result<Expense> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (user_id, amount, category, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, amount, category, description, created_at
            "#,
        )
        .bind(user_id)
        .bind(amount)
        .bind(category)
        .bind(description)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// NULL arguments keep the stored value; presence was decided by the
    /// handler from the request body.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        amount: Option<f64>,
        category: Option<&str>,
        description: Option<&str>,
    ) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET amount = COALESCE($2, amount),
                category = COALESCE($3, category),
                description = COALESCE($4, description)
            WHERE id = $1
            RETURNING id, user_id, amount, category, description, created_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .bind(category)
        .bind(description)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            DELETE FROM expenses
            WHERE id = $1
            RETURNING id, user_id, amount, category, description, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
