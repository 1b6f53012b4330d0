//! Claim engine and status query
//!
//! `claim_today` and `get_status` are the only entry points. Both may
//! run concurrently for the same user with no in-process locking; the
//! ledger store's uniqueness constraint arbitrates duplicate claims
//! and reconciliation provides forward recovery from partial failures
//! instead of compensating rollbacks.

use crate::clock::Clock;
use crate::reconcile::reconciled_points;
use crate::store::LedgerStore;
use crate::streak::current_streak;
use rewardhub_core::{ClaimInsert, PointsStatus, Result, DEFAULT_POINTS_PER_CLAIM};
use tracing::{debug, info, warn};

/// Orchestrates daily claims and status snapshots over a ledger store
pub struct PointsService<S, C> {
    store: S,
    clock: C,
    points_per_claim: i64,
}

impl<S: LedgerStore, C: Clock> PointsService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            points_per_claim: DEFAULT_POINTS_PER_CLAIM,
        }
    }

    /// Override the fixed per-claim reward (default 5)
    pub fn with_points_per_claim(mut self, points: i64) -> Self {
        self.points_per_claim = points;
        self
    }

    /// Freshly computed snapshot of the user's points, claim state,
    /// and streak. Creates the balance row on first contact and
    /// corrects the balance upward from claim history when a prior
    /// increment was lost.
    pub async fn get_status(&self, user_id: &str) -> Result<PointsStatus> {
        self.store.create_balance_if_absent(user_id).await?;

        // The two reads are independent; issue them concurrently
        let (balance, claimed) = tokio::join!(
            self.store.get_balance(user_id),
            self.store.list_claimed_dates(user_id),
        );
        let stored = balance?.unwrap_or(0);
        let claimed = claimed?;

        let today = self.clock.today();
        let has_claimed_today = claimed.contains(&today);

        let corrected = reconciled_points(claimed.len() as i64, stored, self.points_per_claim);
        let points = if corrected > stored {
            match self.store.set_balance(user_id, corrected).await {
                Ok(()) => {
                    info!(
                        "Points: reconciled balance for user {} ({} -> {})",
                        user_id, stored, corrected
                    );
                    corrected
                }
                Err(e) => {
                    // Non-fatal; the next read reconciles again
                    warn!(
                        "Points: reconciliation write failed for user {}: {}",
                        user_id, e
                    );
                    stored
                }
            }
        } else {
            stored
        };

        let streak_days = current_streak(&claimed, today, has_claimed_today);

        Ok(PointsStatus {
            points,
            has_claimed_today,
            streak_days,
        })
    }

    /// Claim today's reward. At most one claim per user per calendar
    /// day can succeed; a repeat call on the same day mutates nothing
    /// and returns the current status.
    pub async fn claim_today(&self, user_id: &str) -> Result<PointsStatus> {
        let today = self.clock.today();

        match self.store.insert_claim_if_absent(user_id, today).await? {
            ClaimInsert::AlreadyExists => {
                debug!(
                    "Points: user {} already claimed on {}, returning status",
                    user_id, today
                );
            }
            ClaimInsert::Inserted => {
                info!("Points: recorded claim for user {} on {}", user_id, today);

                // The claim row is durable at this point. If the
                // increment is lost, the next status read recomputes
                // the balance from claim history, so a failure here
                // must not fail the whole call.
                if let Err(e) = self.apply_claim_reward(user_id).await {
                    warn!(
                        "Points: balance increment failed for user {} after claim insert: {}",
                        user_id, e
                    );
                }
            }
        }

        self.get_status(user_id).await
    }

    async fn apply_claim_reward(&self, user_id: &str) -> Result<()> {
        self.store.create_balance_if_absent(user_id).await?;
        let current = self.store.get_balance(user_id).await?.unwrap_or(0);
        self.store
            .set_balance(user_id, current + self.points_per_claim)
            .await
    }
}
