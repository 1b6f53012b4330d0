//! Consecutive-day streak calculation

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Count consecutive claimed days ending at `today` (when claimed
/// today) or yesterday. Walks backward one calendar day at a time and
/// stops at the first missing day.
///
/// Pure and deterministic; O(streak length).
pub fn current_streak(
    claimed: &BTreeSet<NaiveDate>,
    today: NaiveDate,
    has_claimed_today: bool,
) -> u32 {
    if claimed.is_empty() {
        return 0;
    }

    let mut cursor = if has_claimed_today {
        today
    } else {
        match today.pred_opt() {
            Some(d) => d,
            None => return 0,
        }
    };

    let mut streak = 0;
    while claimed.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(d) => cursor = d,
            None => break,
        }
    }

    streak
}
