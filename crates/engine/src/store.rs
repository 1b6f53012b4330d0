//! Ledger store contract consumed by the points service
//!
//! The service is written against this trait so it runs on SQLite in
//! production and on an in-memory fake in tests. Correctness under
//! concurrent claims rests on the store's uniqueness guarantee for
//! `(user_id, date)`, not on any in-process lock.

use async_trait::async_trait;
use chrono::NaiveDate;
use rewardhub_core::{ClaimInsert, Result};
use rewardhub_persistence::{sqlite, Database};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Durable storage holding per-user balances and claim records
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Stored balance for the user, `None` if no row exists yet
    async fn get_balance(&self, user_id: &str) -> Result<Option<i64>>;

    /// Create a zero-point balance row unless one exists. Must never
    /// overwrite an existing value, even when racing other calls.
    async fn create_balance_if_absent(&self, user_id: &str) -> Result<()>;

    /// Overwrite the stored balance
    async fn set_balance(&self, user_id: &str, points: i64) -> Result<()>;

    /// Atomic conditional claim insert. The store decides whether the
    /// pair already exists; callers must not pre-check.
    async fn insert_claim_if_absent(&self, user_id: &str, date: NaiveDate)
        -> Result<ClaimInsert>;

    /// All dates on which the user has claimed
    async fn list_claimed_dates(&self, user_id: &str) -> Result<BTreeSet<NaiveDate>>;
}

#[async_trait]
impl LedgerStore for Database {
    async fn get_balance(&self, user_id: &str) -> Result<Option<i64>> {
        sqlite::get_balance(self.pool(), user_id).await
    }

    async fn create_balance_if_absent(&self, user_id: &str) -> Result<()> {
        sqlite::create_balance_if_absent(self.pool(), user_id).await
    }

    async fn set_balance(&self, user_id: &str, points: i64) -> Result<()> {
        sqlite::set_balance(self.pool(), user_id, points).await
    }

    async fn insert_claim_if_absent(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<ClaimInsert> {
        sqlite::insert_claim_if_absent(self.pool(), user_id, date).await
    }

    async fn list_claimed_dates(&self, user_id: &str) -> Result<BTreeSet<NaiveDate>> {
        sqlite::list_claimed_dates(self.pool(), user_id).await
    }
}

#[async_trait]
impl<S: LedgerStore + ?Sized> LedgerStore for Arc<S> {
    async fn get_balance(&self, user_id: &str) -> Result<Option<i64>> {
        (**self).get_balance(user_id).await
    }

    async fn create_balance_if_absent(&self, user_id: &str) -> Result<()> {
        (**self).create_balance_if_absent(user_id).await
    }

    async fn set_balance(&self, user_id: &str, points: i64) -> Result<()> {
        (**self).set_balance(user_id, points).await
    }

    async fn insert_claim_if_absent(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<ClaimInsert> {
        (**self).insert_claim_if_absent(user_id, date).await
    }

    async fn list_claimed_dates(&self, user_id: &str) -> Result<BTreeSet<NaiveDate>> {
        (**self).list_claimed_dates(user_id).await
    }
}
