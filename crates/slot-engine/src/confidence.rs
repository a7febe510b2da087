//! Confidence tiers for candidate slots.

use serde::{Deserialize, Serialize};

/// How many of the candidate participants are free during a slot,
/// relative to the total candidate count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// At least 80% of participants are free.
    High,
    /// At least 50% of participants are free.
    Medium,
    /// Fewer than 50% of participants are free.
    Low,
}

impl Confidence {
    /// Tier for `available` free participants out of `total`.
    ///
    /// Boundaries are inclusive on the lower bound of each tier:
    /// exactly 0.8 is `High`, exactly 0.5 is `Medium`.
    pub fn from_ratio(available: usize, total: usize) -> Self {
        // Integer comparison avoids float rounding at the tier boundaries:
        // available/total >= n/d  iff  available * d >= n * total.
        if available * 5 >= total * 4 {
            Confidence::High
        } else if available * 2 >= total {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}
