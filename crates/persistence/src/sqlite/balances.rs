//! Point balance persistence operations

use rewardhub_core::{Error, Result};
use sqlx::SqlitePool;

/// Get the stored point balance for a user, if a row exists
pub async fn get_balance(pool: &SqlitePool, user_id: &str) -> Result<Option<i64>> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT points FROM user_points WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::StorageUnavailable(e.to_string()))?;

    Ok(row.map(|r| r.0))
}

/// Create a zero-point balance row if the user has none.
/// Never overwrites an existing row, so it is safe to race with
/// concurrent claims and other status queries.
pub async fn create_balance_if_absent(pool: &SqlitePool, user_id: &str) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO user_points (user_id, points) VALUES (?, 0)
           ON CONFLICT(user_id) DO NOTHING"#,
    )
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| Error::StorageUnavailable(e.to_string()))?;

    Ok(())
}

/// Overwrite a user's stored balance
pub async fn set_balance(pool: &SqlitePool, user_id: &str, points: i64) -> Result<()> {
    sqlx::query("UPDATE user_points SET points = ? WHERE user_id = ?")
        .bind(points)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| Error::StorageUnavailable(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::Database;

    #[tokio::test]
    async fn test_create_balance_does_not_overwrite() {
        let db = Database::connect_in_memory().await.unwrap();

        create_balance_if_absent(db.pool(), "u1").await.unwrap();
        set_balance(db.pool(), "u1", 25).await.unwrap();

        // Second create must be a no-op
        create_balance_if_absent(db.pool(), "u1").await.unwrap();

        assert_eq!(get_balance(db.pool(), "u1").await.unwrap(), Some(25));
    }

    #[tokio::test]
    async fn test_get_balance_missing_user() {
        let db = Database::connect_in_memory().await.unwrap();
        assert_eq!(get_balance(db.pool(), "nobody").await.unwrap(), None);
    }
}
