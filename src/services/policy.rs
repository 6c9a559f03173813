use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

const DEFAULT_MINIMUM_AGE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosingPolicy {
    /// How long an auction stays open after it was created.
    /// An auction exactly this old is due.
    pub minimum_age: Duration,
}

impl ClosingPolicy {
    /// Fails for negative ages and ones too large for a `Duration`.
    pub fn of_days(days: i64) -> Result<Self, String> {
        if days < 0 {
            return Err(format!("Minimum age cannot be negative: {}", days));
        }
        let minimum_age = Duration::try_days(days)
            .ok_or_else(|| format!("Minimum age out of range: {}", days))?;
        Ok(ClosingPolicy { minimum_age })
    }

    pub fn is_due(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - created_at >= self.minimum_age
    }
}

impl Default for ClosingPolicy {
    fn default() -> Self {
        ClosingPolicy {
            minimum_age: Duration::days(DEFAULT_MINIMUM_AGE_DAYS),
        }
    }
}

impl fmt::Display for ClosingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinimumAge|{}", self.minimum_age.num_days())
    }
}

impl FromStr for ClosingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('|').collect::<Vec<&str>>().as_slice() {
            ["MinimumAge", days] => {
                let days = days.parse::<i64>()
                    .map_err(|_| format!("Invalid minimum age: {}", days))?;
                ClosingPolicy::of_days(days)
            }
            _ => Err(format!("Invalid closing policy format: {}", s)),
        }
    }
}
