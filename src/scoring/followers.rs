// Follower analysis — follower/following/post count relationships.
//
// Bought followers, follow-for-follow farms and dormant mass-followers each
// leave a distinctive shape in the three counts.

use serde::{Deserialize, Serialize};

use super::{SubAnalysis, Tally};
use crate::profile::Profile;

const BASE_CONFIDENCE: f64 = 0.85;

/// The platform refuses follows somewhere around 7,500.
const FOLLOWING_CAP_THRESHOLD: u64 = 7_400;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowerDetails {
    pub high_followers_low_posts: bool,
    pub following_limit: bool,
    pub suspicious_ratio: bool,
    pub mass_following: bool,
    pub inactive_following: bool,
    /// followers / max(following, 1)
    pub ratio: f64,
    /// Only computed when the account follows someone
    pub engagement_rate: Option<f64>,
}

pub fn analyze_followers(profile: &Profile) -> SubAnalysis<FollowerDetails> {
    let followers = profile.followers_count;
    let following = profile.following_count;
    let posts = profile.posts_count;

    let mut tally = Tally::new(BASE_CONFIDENCE);
    let ratio = followers as f64 / following.max(1) as f64;

    let high_followers_low_posts = tally.add_if(followers > 10_000 && posts < 5, 0.40, 0.10);
    let following_limit = tally.add_if(following > FOLLOWING_CAP_THRESHOLD, 0.30, 0.15);
    let suspicious_ratio = tally.add_if(ratio < 0.01 || ratio > 100.0, 0.35, 0.10);
    let mass_following = tally.add_if(following > 3_000 && followers < 100, 0.45, 0.15);
    let inactive_following = tally.add_if(following > 1_000 && posts < 3, 0.25, 0.10);

    let engagement_rate = if following > 0 {
        let rate = (followers as f64 / following as f64) * (posts as f64 / 100.0);
        tally.add_if(rate < 0.01, 0.30, 0.10);
        Some(rate)
    } else {
        None
    };

    tally.finish(FollowerDetails {
        high_followers_low_posts,
        following_limit,
        suspicious_ratio,
        mass_following,
        inactive_following,
        ratio,
        engagement_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(followers: u64, following: u64, posts: u64) -> Profile {
        Profile {
            followers_count: followers,
            following_count: following,
            posts_count: posts,
            ..Profile::new("someone")
        }
    }

    #[test]
    fn test_organic_counts_score_zero() {
        let result = analyze_followers(&counts(800, 400, 120));
        assert_eq!(result.score, 0.0);
        assert!((result.confidence - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_zero_following_divides_by_one() {
        let result = analyze_followers(&counts(50, 0, 10));
        assert!((result.details.ratio - 50.0).abs() < f64::EPSILON);
        assert!(result.details.engagement_rate.is_none());
        assert!(!result.details.suspicious_ratio);
    }

    #[test]
    fn test_mass_follower_near_cap() {
        let result = analyze_followers(&counts(20, 7_450, 1));
        let d = &result.details;
        assert!(d.following_limit);
        assert!(d.suspicious_ratio);
        assert!(d.mass_following);
        assert!(d.inactive_following);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.confidence, 1.0);
    }
}
