// Profile records — what the page extractor hands us and what the engine scores.
//
// Two shapes live here. `ExtractedProfile` mirrors the loosely-typed JSON
// record the extractor produces (every field optional, plus an `error`
// field on failure). `Profile` is the validated, strongly-typed record the
// scoring engine consumes. Conversion between the two is where malformed
// input gets rejected.

pub mod extract;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

/// Maximum number of recent post timestamps the extractor collects.
pub const MAX_POST_DATES: usize = 12;

/// Text length as the profile page measures it, in UTF-16 code units.
///
/// An emoji outside the Basic Multilingual Plane counts as two.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Precomputed auxiliary ratios supplied alongside a profile.
///
/// Any field missing from the JSON record is treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileMetrics {
    /// Observed engagement rate (likes + comments relative to followers)
    pub engagement: f64,
    /// Posts divided by followers (0 when the account has no followers)
    pub posts_per_follower: f64,
    /// Followers divided by following (0 when the account follows nobody)
    pub follower_to_following_ratio: f64,
    pub username_length: usize,
    pub has_numbers: bool,
    /// Characters in the username that are neither alphanumeric nor `_`
    pub special_chars_count: usize,
    pub underscores_count: usize,
    pub has_bio_links: bool,
    pub emoji_count: usize,
}

/// A validated social media profile, ready for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    /// Profile picture URL, empty when the account has none
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_private: bool,
    pub followers_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
    /// Timestamps of up to 12 recent posts, in no particular order
    #[serde(default)]
    pub post_dates: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub has_highlights: bool,
    #[serde(default)]
    pub has_external_url: bool,
    #[serde(default)]
    pub profile_metrics: ProfileMetrics,
}

impl Profile {
    /// A bare profile with the given username and every other field empty or zero.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: String::new(),
            bio: String::new(),
            profile_image: String::new(),
            is_verified: false,
            is_private: false,
            followers_count: 0,
            following_count: 0,
            posts_count: 0,
            post_dates: Vec::new(),
            has_highlights: false,
            has_external_url: false,
            profile_metrics: ProfileMetrics::default(),
        }
    }

    /// Check the invariants the type system can't express.
    ///
    /// Counts are unsigned so they can't go negative, but the username can
    /// be empty and the float metrics can be NaN or infinite. Either would
    /// poison the weighted average, so they're rejected up front.
    pub fn validate(&self) -> ProfileResult<()> {
        if self.username.is_empty() {
            return Err(ProfileError::EmptyUsername);
        }
        if self.post_dates.len() > MAX_POST_DATES {
            return Err(ProfileError::TooManyPostDates(self.post_dates.len()));
        }

        let metrics = &self.profile_metrics;
        for (name, value) in [
            ("engagement", metrics.engagement),
            ("postsPerFollower", metrics.posts_per_follower),
            ("followerToFollowingRatio", metrics.follower_to_following_ratio),
        ] {
            if !value.is_finite() {
                return Err(ProfileError::NonFiniteMetric(name));
            }
        }
        Ok(())
    }
}

/// The raw record produced by the page extractor.
///
/// On extraction failure the extractor returns only `username` and `error`.
/// Such records are rejected when converting to a [`Profile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: Option<bool>,
    pub is_private: Option<bool>,
    pub followers_count: Option<f64>,
    pub following_count: Option<f64>,
    pub posts_count: Option<f64>,
    /// ISO-8601 timestamps as scraped from the page
    pub post_dates: Option<Vec<String>>,
    pub has_highlights: Option<bool>,
    pub has_external_url: Option<bool>,
    pub profile_metrics: Option<ProfileMetrics>,
    /// Set by the extractor when it could not read the page
    pub error: Option<String>,
}

impl TryFrom<ExtractedProfile> for Profile {
    type Error = ProfileError;

    fn try_from(raw: ExtractedProfile) -> ProfileResult<Self> {
        if let Some(reason) = raw.error {
            return Err(ProfileError::Degraded {
                username: raw.username.unwrap_or_default(),
                reason,
            });
        }

        let username = raw.username.ok_or(ProfileError::MissingField("username"))?;
        let followers_count = require_count("followersCount", raw.followers_count)?;
        let following_count = require_count("followingCount", raw.following_count)?;
        let posts_count = require_count("postsCount", raw.posts_count)?;

        let raw_dates = raw.post_dates.unwrap_or_default();
        if raw_dates.len() > MAX_POST_DATES {
            return Err(ProfileError::TooManyPostDates(raw_dates.len()));
        }
        let post_dates = raw_dates
            .iter()
            .map(|value| parse_timestamp(value))
            .collect::<ProfileResult<Vec<_>>>()?;

        let profile = Profile {
            username,
            full_name: raw.full_name.unwrap_or_default(),
            bio: raw.bio.unwrap_or_default(),
            profile_image: raw.profile_image.unwrap_or_default(),
            is_verified: raw.is_verified.unwrap_or(false),
            is_private: raw.is_private.unwrap_or(false),
            followers_count,
            following_count,
            posts_count,
            post_dates,
            has_highlights: raw.has_highlights.unwrap_or(false),
            has_external_url: raw.has_external_url.unwrap_or(false),
            profile_metrics: raw.profile_metrics.unwrap_or_default(),
        };

        profile.validate()?;
        Ok(profile)
    }
}

/// Convert a scraped count to an integer, rejecting absent, negative, or NaN values.
///
/// Abbreviated counts like "1.2345K" can scrape to fractional numbers;
/// those are rounded to the nearest whole follower.
fn require_count(field: &'static str, value: Option<f64>) -> ProfileResult<u64> {
    let value = value.ok_or(ProfileError::MissingField(field))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ProfileError::InvalidCount { field, value });
    }
    Ok(value.round() as u64)
}

fn parse_timestamp(value: &str) -> ProfileResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ProfileError::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> ExtractedProfile {
        ExtractedProfile {
            username: Some("jane.doe".to_string()),
            full_name: Some("Jane Doe".to_string()),
            followers_count: Some(420.0),
            following_count: Some(310.0),
            posts_count: Some(57.0),
            post_dates: Some(vec!["2024-03-01T12:00:00.000Z".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_converts() {
        let profile = Profile::try_from(complete_record()).unwrap();
        assert_eq!(profile.username, "jane.doe");
        assert_eq!(profile.followers_count, 420);
        assert_eq!(profile.post_dates.len(), 1);
        assert_eq!(profile.bio, "");
        assert!(!profile.is_verified);
    }

    #[test]
    fn test_degraded_record_is_rejected() {
        let raw = ExtractedProfile {
            username: Some("someone".to_string()),
            error: Some("Not on an Instagram profile page".to_string()),
            ..Default::default()
        };
        let err = Profile::try_from(raw).unwrap_err();
        assert!(matches!(err, ProfileError::Degraded { ref username, .. } if username == "someone"));
    }

    #[test]
    fn test_missing_count_is_rejected() {
        let raw = ExtractedProfile {
            posts_count: None,
            ..complete_record()
        };
        assert_eq!(
            Profile::try_from(raw).unwrap_err(),
            ProfileError::MissingField("postsCount")
        );
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let raw = ExtractedProfile {
            followers_count: Some(-3.0),
            ..complete_record()
        };
        assert!(matches!(
            Profile::try_from(raw).unwrap_err(),
            ProfileError::InvalidCount { field: "followersCount", .. }
        ));
    }

    #[test]
    fn test_fractional_count_rounds() {
        let raw = ExtractedProfile {
            followers_count: Some(1234.5),
            ..complete_record()
        };
        assert_eq!(Profile::try_from(raw).unwrap().followers_count, 1235);
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        let raw = ExtractedProfile {
            post_dates: Some(vec!["yesterday".to_string()]),
            ..complete_record()
        };
        assert!(matches!(
            Profile::try_from(raw).unwrap_err(),
            ProfileError::InvalidTimestamp { .. }
        ));
    }

    #[test]
    fn test_nan_metric_fails_validation() {
        let mut profile = Profile::new("someone");
        profile.profile_metrics.engagement = f64::NAN;
        assert_eq!(
            profile.validate().unwrap_err(),
            ProfileError::NonFiniteMetric("engagement")
        );
    }
}
