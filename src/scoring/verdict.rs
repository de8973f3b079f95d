// Verdicts and factor labels — the fixed text tables the combiner maps into.
//
// Everything user-facing the engine produces is one of these enumerated
// strings: six verdicts and fifteen per-category factor labels plus the
// verification bonus.

use serde::{Deserialize, Serialize};

/// Verdict bucket boundaries on the 0-100 score.
pub const GENUINE_BELOW: u32 = 25;
pub const SUSPICIOUS_BELOW: u32 = 65;

/// Confidence at or above which the verdict drops its hedging.
pub const HIGH_CONFIDENCE_AT: u32 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Genuine (High Confidence)")]
    GenuineHighConfidence,
    #[serde(rename = "Suspicious (High Confidence)")]
    SuspiciousHighConfidence,
    #[serde(rename = "Fake (High Confidence)")]
    FakeHighConfidence,
    #[serde(rename = "Likely Genuine")]
    LikelyGenuine,
    #[serde(rename = "Potentially Suspicious")]
    PotentiallySuspicious,
    #[serde(rename = "Likely Fake")]
    LikelyFake,
}

impl Verdict {
    /// Bucket a final score, phrased according to the final confidence.
    pub fn from_score(score: u32, confidence: u32) -> Self {
        let high = confidence >= HIGH_CONFIDENCE_AT;
        match (score, high) {
            (s, true) if s < GENUINE_BELOW => Verdict::GenuineHighConfidence,
            (s, true) if s < SUSPICIOUS_BELOW => Verdict::SuspiciousHighConfidence,
            (_, true) => Verdict::FakeHighConfidence,
            (s, false) if s < GENUINE_BELOW => Verdict::LikelyGenuine,
            (s, false) if s < SUSPICIOUS_BELOW => Verdict::PotentiallySuspicious,
            (_, false) => Verdict::LikelyFake,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::GenuineHighConfidence => "Genuine (High Confidence)",
            Verdict::SuspiciousHighConfidence => "Suspicious (High Confidence)",
            Verdict::FakeHighConfidence => "Fake (High Confidence)",
            Verdict::LikelyGenuine => "Likely Genuine",
            Verdict::PotentiallySuspicious => "Potentially Suspicious",
            Verdict::LikelyFake => "Likely Fake",
        }
    }

    pub fn is_high_confidence(&self) -> bool {
        matches!(
            self,
            Verdict::GenuineHighConfidence
                | Verdict::SuspiciousHighConfidence
                | Verdict::FakeHighConfidence
        )
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Good,
    Warning,
    Bad,
}

impl FactorKind {
    /// Bucket one analyzer's score: above 0.7 is bad, above 0.3 a warning.
    pub fn from_sub_score(score: f64) -> Self {
        if score > 0.7 {
            FactorKind::Bad
        } else if score > 0.3 {
            FactorKind::Warning
        } else {
            FactorKind::Good
        }
    }
}

/// The five analyzer categories, in factor-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Username,
    Followers,
    Content,
    Completeness,
    Engagement,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Username,
        Category::Followers,
        Category::Content,
        Category::Completeness,
        Category::Engagement,
    ];

    /// Fixed (title, description) for this category at the given bucket.
    pub fn label(&self, kind: FactorKind) -> (&'static str, &'static str) {
        use Category::*;
        use FactorKind::*;
        match (self, kind) {
            (Username, Bad) => (
                "Highly Suspicious Username",
                "Multiple suspicious patterns detected in username structure.",
            ),
            (Username, Warning) => (
                "Questionable Username",
                "Some unusual patterns found in username.",
            ),
            (Username, Good) => (
                "Natural Username",
                "Username appears authentic and natural.",
            ),
            (Followers, Bad) => (
                "Artificial Following Pattern",
                "Highly unusual follower/following ratio and growth patterns.",
            ),
            (Followers, Warning) => (
                "Unusual Following Pattern",
                "Some irregularities in follower/following patterns.",
            ),
            (Followers, Good) => (
                "Natural Following Pattern",
                "Follower and following patterns appear organic.",
            ),
            (Content, Bad) => (
                "Suspicious Content Patterns",
                "Content posting behavior shows strong signs of automation.",
            ),
            (Content, Warning) => (
                "Unusual Content Patterns",
                "Some irregularities detected in posting behavior.",
            ),
            (Content, Good) => (
                "Natural Content Patterns",
                "Content posting appears genuine and consistent.",
            ),
            (Completeness, Bad) => (
                "Incomplete Profile",
                "Profile lacks multiple elements typical of genuine accounts.",
            ),
            (Completeness, Warning) => (
                "Basic Profile",
                "Profile is missing some common elements.",
            ),
            (Completeness, Good) => (
                "Complete Profile",
                "Profile appears well-maintained and authentic.",
            ),
            (Engagement, Bad) => (
                "Artificial Engagement",
                "Engagement patterns suggest automated or inauthentic activity.",
            ),
            (Engagement, Warning) => (
                "Questionable Engagement",
                "Some engagement metrics appear unusual.",
            ),
            (Engagement, Good) => (
                "Natural Engagement",
                "Engagement appears organic and consistent.",
            ),
        }
    }
}

pub const VERIFIED_TITLE: &str = "Verified Account";
pub const VERIFIED_DESCRIPTION: &str = "This account has been verified by Instagram.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hedged_verdicts() {
        assert_eq!(Verdict::from_score(10, 84), Verdict::LikelyGenuine);
        assert_eq!(Verdict::from_score(40, 84), Verdict::PotentiallySuspicious);
        assert_eq!(Verdict::from_score(90, 84), Verdict::LikelyFake);
    }

    #[test]
    fn test_confidence_tier_boundary() {
        assert!(Verdict::from_score(10, 85).is_high_confidence());
        assert!(!Verdict::from_score(10, 84).is_high_confidence());
    }

    #[test]
    fn test_factor_bucket_edges() {
        assert_eq!(FactorKind::from_sub_score(0.3), FactorKind::Good);
        assert_eq!(FactorKind::from_sub_score(0.31), FactorKind::Warning);
        assert_eq!(FactorKind::from_sub_score(0.7), FactorKind::Warning);
        assert_eq!(FactorKind::from_sub_score(0.71), FactorKind::Bad);
    }

    #[test]
    fn test_verdict_serializes_as_label() {
        let json = serde_json::to_string(&Verdict::LikelyFake).unwrap();
        assert_eq!(json, "\"Likely Fake\"");
    }
}
