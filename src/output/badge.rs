// Result badge and score gauge — presentation-side bucketing.
//
// The badge has its own thresholds (30/70), independent of the engine's
// verdict buckets (25/65). Only the gauge and history table use it.

use serde::{Deserialize, Serialize};

pub const REAL_BELOW: u32 = 30;
pub const SUSPICIOUS_BELOW: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultBadge {
    Real,
    Suspicious,
    Fake,
}

impl ResultBadge {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s < REAL_BELOW => ResultBadge::Real,
            s if s < SUSPICIOUS_BELOW => ResultBadge::Suspicious,
            _ => ResultBadge::Fake,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultBadge::Real => "Likely Real",
            ResultBadge::Suspicious => "Suspicious",
            ResultBadge::Fake => "Likely Fake",
        }
    }
}

impl std::fmt::Display for ResultBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Gauge needle rotation in degrees: -90 (score 0) through 90 (score 100).
pub fn needle_angle(score: u32) -> f64 {
    (score.min(100) as f64 / 100.0) * 180.0 - 90.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_boundaries() {
        assert_eq!(ResultBadge::from_score(0), ResultBadge::Real);
        assert_eq!(ResultBadge::from_score(29), ResultBadge::Real);
        assert_eq!(ResultBadge::from_score(30), ResultBadge::Suspicious);
        assert_eq!(ResultBadge::from_score(69), ResultBadge::Suspicious);
        assert_eq!(ResultBadge::from_score(70), ResultBadge::Fake);
        assert_eq!(ResultBadge::from_score(100), ResultBadge::Fake);
    }

    #[test]
    fn test_needle_angle() {
        assert_eq!(needle_angle(0), -90.0);
        assert_eq!(needle_angle(50), 0.0);
        assert_eq!(needle_angle(100), 90.0);
    }
}
