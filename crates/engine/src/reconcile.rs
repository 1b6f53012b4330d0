//! Balance reconciliation from claim history
//!
//! A claim insert and its balance increment are two separate writes.
//! If the increment is lost to a crash or transient storage failure,
//! the stored balance under-counts. Every status read recomputes the
//! floor implied by the authoritative claim history and corrects
//! upward. The stored balance is never corrected downward.

/// Corrected balance for a user: `max(stored, claim_count * points_per_claim)`
pub fn reconciled_points(claim_count: i64, stored: i64, points_per_claim: i64) -> i64 {
    stored.max(claim_count * points_per_claim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undercount_corrected_from_claims() {
        // 3 claims at 5 points each but only one increment landed
        assert_eq!(reconciled_points(3, 5, 5), 15);
    }

    #[test]
    fn test_stored_balance_never_decreases() {
        // Stored balance above the claim floor is kept as-is
        assert_eq!(reconciled_points(1, 100, 5), 100);
    }

    #[test]
    fn test_exact_balance_unchanged() {
        assert_eq!(reconciled_points(4, 20, 5), 20);
    }

    #[test]
    fn test_no_claims() {
        assert_eq!(reconciled_points(0, 0, 5), 0);
        assert_eq!(reconciled_points(0, 7, 5), 7);
    }
}
