//! Claim record persistence operations

use chrono::NaiveDate;
use rewardhub_core::{ClaimInsert, Error, Result};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

/// Insert a claim for `(user_id, date)` unless one already exists.
///
/// The composite primary key on `point_claims` makes this a single
/// atomic conditional insert; two concurrent calls for the same pair
/// can never both report `Inserted`.
pub async fn insert_claim_if_absent(
    pool: &SqlitePool,
    user_id: &str,
    date: NaiveDate,
) -> Result<ClaimInsert> {
    let result = sqlx::query(
        r#"INSERT INTO point_claims (user_id, claimed_on) VALUES (?, ?)
           ON CONFLICT(user_id, claimed_on) DO NOTHING"#,
    )
    .bind(user_id)
    .bind(date)
    .execute(pool)
    .await
    .map_err(|e| Error::StorageUnavailable(e.to_string()))?;

    if result.rows_affected() == 1 {
        Ok(ClaimInsert::Inserted)
    } else {
        Ok(ClaimInsert::AlreadyExists)
    }
}

/// All dates on which the user has claimed
pub async fn list_claimed_dates(pool: &SqlitePool, user_id: &str) -> Result<BTreeSet<NaiveDate>> {
    let rows: Vec<(NaiveDate,)> = sqlx::query_as(
        "SELECT claimed_on FROM point_claims WHERE user_id = ? ORDER BY claimed_on DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| Error::StorageUnavailable(e.to_string()))?;

    Ok(rows.into_iter().map(|r| r.0).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::Database;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_claim_rejected_by_store() {
        let db = Database::connect_in_memory().await.unwrap();
        let day = date("2026-08-23");

        let first = insert_claim_if_absent(db.pool(), "u1", day).await.unwrap();
        let second = insert_claim_if_absent(db.pool(), "u1", day).await.unwrap();

        assert_eq!(first, ClaimInsert::Inserted);
        assert_eq!(second, ClaimInsert::AlreadyExists);

        let dates = list_claimed_dates(db.pool(), "u1").await.unwrap();
        assert_eq!(dates.len(), 1);
    }

    #[tokio::test]
    async fn test_same_date_different_users() {
        let db = Database::connect_in_memory().await.unwrap();
        let day = date("2026-08-23");

        assert_eq!(
            insert_claim_if_absent(db.pool(), "u1", day).await.unwrap(),
            ClaimInsert::Inserted
        );
        assert_eq!(
            insert_claim_if_absent(db.pool(), "u2", day).await.unwrap(),
            ClaimInsert::Inserted
        );
    }

    #[tokio::test]
    async fn test_claimed_dates_round_trip() {
        let db = Database::connect_in_memory().await.unwrap();
        let days = ["2026-08-21", "2026-08-22", "2026-08-23"];

        for d in days {
            insert_claim_if_absent(db.pool(), "u1", date(d))
                .await
                .unwrap();
        }

        let dates = list_claimed_dates(db.pool(), "u1").await.unwrap();
        assert_eq!(dates.len(), 3);
        for d in days {
            assert!(dates.contains(&date(d)));
        }

        // Other users see nothing
        assert!(list_claimed_dates(db.pool(), "u2").await.unwrap().is_empty());
    }
}
