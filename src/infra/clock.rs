use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The calendar date of `now`, in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that never moves, for deterministic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        FixedClock { now }
    }

    /// Midnight UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        FixedClock { now: date.and_time(NaiveTime::MIN).and_utc() }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
