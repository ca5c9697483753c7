//! Contains all database functions for the member point ledger.
//! Each write is a single upsert statement; callers get per-call atomicity
//! and nothing more.

use serenity::model::id::UserId;
use sqlx::PgPool;
use tracing::instrument;

/// Creates the point ledger table on a fresh database.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS member_points (
            user_id BIGINT PRIMARY KEY,
            points BIGINT NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Adds (or subtracts, when negative) points for a member, inserting the row
/// on first touch. Totals may go negative; a member can owe chores.
#[instrument(level = "debug", skip(pool))]
pub async fn add_points(pool: &PgPool, user_id: UserId, delta: i64) -> Result<(), sqlx::Error> {
    let user_id_i64 = user_id.get() as i64;
    sqlx::query(
        "INSERT INTO member_points (user_id, points) VALUES ($1, $2)
         ON CONFLICT (user_id) DO UPDATE SET points = member_points.points + $2",
    )
    .bind(user_id_i64)
    .bind(delta)
    .execute(pool)
    .await?;
    Ok(())
}

/// Reads a member's point total. Members never written to read as zero.
pub async fn get_points(pool: &PgPool, user_id: UserId) -> Result<i64, sqlx::Error> {
    let user_id_i64 = user_id.get() as i64;
    let points: Option<i64> =
        sqlx::query_scalar("SELECT points FROM member_points WHERE user_id = $1")
            .bind(user_id_i64)
            .fetch_optional(pool)
            .await?;
    Ok(points.unwrap_or(0))
}
