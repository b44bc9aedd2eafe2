//! Startup schema for the drawings table
//!
//! There is no migration tooling: the schema is one table, created
//! idempotently every time the server starts. Re-running against an
//! already-initialized database is a no-op.

use sqlx::PgPool;

/// Create the drawings table and its index if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring drawings schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drawings (
            id         SERIAL PRIMARY KEY,
            title      VARCHAR(200) NOT NULL DEFAULT 'Untitled',
            data       JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // The list view orders newest-first
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_drawings_created ON drawings(created_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Drawings schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn schema_setup_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run should be a no-op");
    }
}
