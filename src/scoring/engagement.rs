// Engagement analysis — does the audience size match the activity?

use serde::{Deserialize, Serialize};

use super::{SubAnalysis, Tally};
use crate::profile::Profile;

const BASE_CONFIDENCE: f64 = 0.80;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementDetails {
    /// followers / max(posts, 1)
    pub follower_post_ratio: f64,
    pub engagement_rate: f64,
    pub suspicious_growth: bool,
    pub abnormal_activity: bool,
}

pub fn analyze_engagement(profile: &Profile) -> SubAnalysis<EngagementDetails> {
    let followers = profile.followers_count;
    let posts = profile.posts_count;
    let metrics = &profile.profile_metrics;

    let mut tally = Tally::new(BASE_CONFIDENCE);
    let follower_post_ratio = followers as f64 / posts.max(1) as f64;

    tally.add_if(follower_post_ratio > 10_000.0, 0.40, 0.15);
    tally.add_if(metrics.engagement < 0.001, 0.35, 0.10);
    let suspicious_growth = tally.add_if(followers > 5_000 && posts < 5, 0.45, 0.20);
    let abnormal_activity = tally.add_if(metrics.posts_per_follower < 0.0001, 0.30, 0.15);

    tally.finish(EngagementDetails {
        follower_post_ratio,
        engagement_rate: metrics.engagement,
        suspicious_growth,
        abnormal_activity,
    })
}
