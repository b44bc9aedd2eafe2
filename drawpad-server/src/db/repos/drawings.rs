//! Drawing repository
//!
//! Create/list/get/delete against the drawings table. The stroke
//! document is opaque JSONB: stored and returned verbatim, never
//! inspected.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Row};

use crate::models::DrawingTitle;

/// Full drawing record, including the stroke document.
#[derive(Debug, Clone)]
pub struct Drawing {
    pub id: i32,
    pub title: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

/// Reduced record for list display; excludes the (potentially large)
/// stroke document.
#[derive(Debug, Clone)]
pub struct DrawingSummary {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Drawing repository
pub struct DrawingRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DrawingRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a drawing and return the committed row.
    ///
    /// `id` and `created_at` are assigned by the database; RETURNING
    /// hands back the populated record in the same statement.
    pub async fn create(&self, title: DrawingTitle, data: Value) -> Result<Drawing, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO drawings (title, data)
            VALUES ($1, $2)
            RETURNING id, title, data, created_at
            "#,
        )
        .bind(title.as_str())
        .bind(&data)
        .fetch_one(self.pool)
        .await?;

        Ok(Drawing {
            id: row.get("id"),
            title: row.get("title"),
            data: row.get("data"),
            created_at: row.get("created_at"),
        })
    }

    /// List all drawings, newest first.
    ///
    /// The `data` column is never selected here. `id` breaks ties so
    /// two inserts within one clock tick still list newest-first.
    pub async fn list(&self) -> Result<Vec<DrawingSummary>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, created_at
            FROM drawings
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DrawingSummary {
                id: r.get("id"),
                title: r.get("title"),
                created_at: r.get("created_at"),
            })
            .collect())
    }

    /// Get a single drawing by id, including the stroke document.
    pub async fn get(&self, id: i32) -> Result<Drawing, DbError> {
        let row = sqlx::query("SELECT id, title, data, created_at FROM drawings WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "drawing",
                id: id.to_string(),
            })?;

        Ok(Drawing {
            id: row.get("id"),
            title: row.get("title"),
            data: row.get("data"),
            created_at: row.get("created_at"),
        })
    }

    /// Delete a drawing by id.
    ///
    /// Zero rows affected means the id was absent (or already deleted)
    /// and surfaces as NotFound; a repeat delete is a 404 at the API
    /// layer, never a silent success.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM drawings WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "drawing",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p drawpad-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url)
            .await
            .expect("pool creation failed");
        crate::db::migrations::run(&pool)
            .await
            .expect("schema setup failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips_data() {
        let pool = test_pool().await;
        let repo = DrawingRepo::new(&pool);

        let data = json!({"strokes": [{"points": [[0, 0], [3.5, 7]], "width": 2}]});
        let title = DrawingTitle::new("Cat").expect("valid title");
        let created = repo
            .create(title, data.clone())
            .await
            .expect("create failed");

        assert!(created.id > 0);
        assert_eq!(created.title, "Cat");
        assert_eq!(created.data, data);

        let fetched = repo.get(created.id).await.expect("get failed");
        assert_eq!(fetched.title, "Cat");
        assert_eq!(fetched.data, data);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first_without_data() {
        let pool = test_pool().await;
        let repo = DrawingRepo::new(&pool);

        let a = repo
            .create(DrawingTitle::new("older").expect("valid"), json!([1]))
            .await
            .expect("create failed");
        let b = repo
            .create(DrawingTitle::new("newer").expect("valid"), json!([2]))
            .await
            .expect("create failed");

        let summaries = repo.list().await.expect("list failed");
        let pos = |id: i32| {
            summaries
                .iter()
                .position(|s| s.id == id)
                .expect("missing from list")
        };
        assert!(pos(b.id) < pos(a.id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_twice_is_not_found() {
        let pool = test_pool().await;
        let repo = DrawingRepo::new(&pool);

        let d = repo
            .create(DrawingTitle::default(), json!([]))
            .await
            .expect("create failed");
        repo.delete(d.id).await.expect("first delete failed");

        let err = repo.delete(d.id).await.expect_err("second delete succeeded");
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = repo.get(d.id).await.expect_err("get after delete succeeded");
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
