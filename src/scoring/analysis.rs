// Combiner — runs the five analyzers and folds them into one Analysis.
//
// The final score is a weighted average of the five sub-scores (weights
// picked by strictness). Confidence is the plain mean of the five
// sub-confidences. The factor list explains each category in fixed text.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::completeness::{analyze_completeness, CompletenessDetails};
use super::content::{analyze_content, ContentDetails};
use super::engagement::{analyze_engagement, EngagementDetails};
use super::followers::{analyze_followers, FollowerDetails};
use super::username::{analyze_username, UsernameDetails};
use super::verdict::{Category, FactorKind, Verdict, VERIFIED_DESCRIPTION, VERIFIED_TITLE};
use super::weights::{resolve_weights, Strictness, WeightSet};
use super::SubAnalysis;
use crate::error::ProfileResult;
use crate::profile::Profile;

/// One line of the human-readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFactor {
    #[serde(rename = "type")]
    pub kind: FactorKind,
    pub title: String,
    pub description: String,
    /// Percentage string, e.g. "85%"
    pub confidence: String,
}

impl AnalysisFactor {
    fn for_category(category: Category, score: f64, confidence: f64) -> Self {
        let kind = FactorKind::from_sub_score(score);
        let (title, description) = category.label(kind);
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            confidence: percent_label(confidence),
        }
    }

    fn verified() -> Self {
        Self {
            kind: FactorKind::Good,
            title: VERIFIED_TITLE.to_string(),
            description: VERIFIED_DESCRIPTION.to_string(),
            confidence: "100%".to_string(),
        }
    }
}

/// The engine's output for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Fake likelihood, 0 (genuine) to 100 (fake)
    pub score: u32,
    /// 0 to 100
    pub confidence: u32,
    pub verdict: Verdict,
    pub factors: Vec<AnalysisFactor>,
}

/// All five sub-analyses for a profile, before combining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub username: SubAnalysis<UsernameDetails>,
    pub followers: SubAnalysis<FollowerDetails>,
    pub content: SubAnalysis<ContentDetails>,
    pub completeness: SubAnalysis<CompletenessDetails>,
    pub engagement: SubAnalysis<EngagementDetails>,
}

impl Breakdown {
    /// Run every analyzer over the profile. The analyzers share nothing, so
    /// the order here has no effect on the result.
    pub fn compute(profile: &Profile) -> Self {
        Self {
            username: analyze_username(&profile.username),
            followers: analyze_followers(profile),
            content: analyze_content(profile),
            completeness: analyze_completeness(profile),
            engagement: analyze_engagement(profile),
        }
    }

    /// (category, score, confidence) in factor-list order.
    pub fn scores(&self) -> [(Category, f64, f64); 5] {
        [
            (Category::Username, self.username.score, self.username.confidence),
            (Category::Followers, self.followers.score, self.followers.confidence),
            (Category::Content, self.content.score, self.content.confidence),
            (
                Category::Completeness,
                self.completeness.score,
                self.completeness.confidence,
            ),
            (Category::Engagement, self.engagement.score, self.engagement.confidence),
        ]
    }

    /// Weighted average of the five sub-scores, in [0, 1].
    pub fn weighted_score(&self, weights: &WeightSet) -> f64 {
        let weighted = self.username.score * weights.username
            + self.followers.score * weights.followers
            + self.content.score * weights.content
            + self.completeness.score * weights.completeness
            + self.engagement.score * weights.engagement;
        weighted / weights.total()
    }

    /// Unweighted mean of the five sub-confidences, in [0, 1].
    pub fn mean_confidence(&self) -> f64 {
        let scores = self.scores();
        scores.iter().map(|(_, _, c)| c).sum::<f64>() / scores.len() as f64
    }
}

/// Score a profile at the given strictness.
///
/// Fails only if the profile breaks an invariant (see [`Profile::validate`]);
/// a failing profile produces no partial result.
pub fn analyze(profile: &Profile, strictness: Strictness) -> ProfileResult<Analysis> {
    profile.validate()?;

    let weights = resolve_weights(strictness);
    let breakdown = Breakdown::compute(profile);

    for (category, score, confidence) in breakdown.scores() {
        debug!(
            username = %profile.username,
            category = ?category,
            score = format!("{:.3}", score),
            confidence = format!("{:.3}", confidence),
            "Sub-analysis complete"
        );
    }

    let analysis = combine(&breakdown, &weights, profile.is_verified);

    info!(
        username = %profile.username,
        strictness = strictness.as_str(),
        score = analysis.score,
        confidence = analysis.confidence,
        verdict = analysis.verdict.as_str(),
        "Analyzed profile"
    );

    Ok(analysis)
}

/// Fold a breakdown into the final Analysis.
pub fn combine(breakdown: &Breakdown, weights: &WeightSet, is_verified: bool) -> Analysis {
    let score = to_percent(breakdown.weighted_score(weights));
    let confidence = to_percent(breakdown.mean_confidence());
    let verdict = Verdict::from_score(score, confidence);

    let mut factors: Vec<AnalysisFactor> = breakdown
        .scores()
        .into_iter()
        .map(|(category, score, confidence)| {
            AnalysisFactor::for_category(category, score, confidence)
        })
        .collect();
    if is_verified {
        factors.push(AnalysisFactor::verified());
    }

    Analysis {
        score,
        confidence,
        verdict,
        factors,
    }
}

/// Scale a [0, 1] value to a whole percentage.
fn to_percent(value: f64) -> u32 {
    (value * 100.0).round().clamp(0.0, 100.0) as u32
}

fn percent_label(value: f64) -> String {
    format!("{}%", to_percent(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounding() {
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(0.706), 71);
        assert_eq!(to_percent(0.7049), 70);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(percent_label(0.85), "85%");
    }

    #[test]
    fn test_factor_order_without_verification() {
        let profile = Profile {
            followers_count: 100,
            following_count: 100,
            posts_count: 20,
            ..Profile::new("someone")
        };
        let analysis = analyze(&profile, Strictness::Balanced).unwrap();
        let titles: Vec<&str> = analysis.factors.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles.len(), 5);
        assert!(titles[0].contains("Username"));
        assert!(titles[1].contains("Following"));
        assert!(titles[2].contains("Content"));
        assert!(titles[3].contains("Profile"));
        assert!(titles[4].contains("Engagement"));
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let profile = Profile::new("");
        assert!(analyze(&profile, Strictness::Balanced).is_err());
    }
}
