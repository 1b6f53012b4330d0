//! Points balance, claim record, and derived status models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed reward granted per successful daily claim.
pub const DEFAULT_POINTS_PER_CLAIM: i64 = 5;

/// Per-user running point balance.
///
/// Exactly one row per user; `points` never decreases over the row's
/// lifetime. Created lazily with 0 on first status query or claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBalance {
    pub user_id: String,
    pub points: i64,
}

/// A user's once-per-day claim, keyed by `(user_id, claimed_on)`.
///
/// Immutable once written; the pair uniqueness is enforced by the
/// ledger store, not by application-level checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub user_id: String,
    /// Calendar date in the reference timezone, no time component
    pub claimed_on: NaiveDate,
}

/// Outcome of a conditional claim insert.
///
/// `AlreadyExists` is a normal idempotent outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimInsert {
    Inserted,
    AlreadyExists,
}

/// Snapshot returned to callers, derived fresh on every query.
/// Never persisted or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsStatus {
    /// Balance after reconciliation against claim history
    pub points: i64,
    /// Whether a claim exists for today's date
    pub has_claimed_today: bool,
    /// Consecutive claimed days ending at today or yesterday
    pub streak_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format_is_camel_case() {
        let status = PointsStatus {
            points: 10,
            has_claimed_today: true,
            streak_days: 2,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "points": 10,
                "hasClaimedToday": true,
                "streakDays": 2
            })
        );
    }

    #[test]
    fn test_claim_record_date_serializes_without_time() {
        let record = ClaimRecord {
            user_id: "u1".to_string(),
            claimed_on: "2026-08-23".parse().unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["claimedOn"], "2026-08-23");
        assert_eq!(json["userId"], "u1");

        let back: ClaimRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_balance_wire_format() {
        let balance = PointsBalance {
            user_id: "u1".to_string(),
            points: 0,
        };
        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["points"], 0);
    }
}
