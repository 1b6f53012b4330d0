//! Calendar date source
//!
//! All claim dates and streak math use one reference timezone (UTC) so
//! geographically distributed callers agree on where a day starts. The
//! clock is injected rather than read ambiently to keep the service
//! deterministic under test.

use chrono::{Days, NaiveDate, Utc};
use std::sync::{Arc, Mutex};

/// Supplies the current calendar date, truncated to day granularity
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock reading the UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Settable clock for deterministic tests
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set_today(&self, date: NaiveDate) {
        *self.today.lock().unwrap() = date;
    }

    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock().unwrap();
        *today = *today + Days::new(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
