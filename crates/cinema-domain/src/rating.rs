//! Film ratings.

use serde::Serialize;

/// A single user rating, an integer from 1 to 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Parse a raw path/form value. Only plain decimal digits are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<i64>().ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Mean rating of a film and the number of votes behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub rate: f64,
    pub votes: i64,
}

impl RatingSummary {
    /// Weighted mean of the catalog baseline (`base_rate` over `base_votes`)
    /// and the locally stored ratings (`local_sum` over `local_count`).
    ///
    /// With no votes at all the rate is 0.
    pub fn combine(base_rate: f64, base_votes: i64, local_sum: i64, local_count: i64) -> Self {
        let base_votes = base_votes.max(0);
        let local_count = local_count.max(0);
        let votes = base_votes + local_count;
        if votes == 0 {
            return Self {
                rate: 0.0,
                votes: 0,
            };
        }
        let total = base_rate * base_votes as f64 + local_sum as f64;
        Self {
            rate: total / votes as f64,
            votes,
        }
    }
}
