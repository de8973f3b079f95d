// Profile completeness — penalties for what the profile is missing.
//
// Throwaway accounts rarely bother with a name, bio, picture or highlights.
// Verification offsets most of those penalties. A bio, when present, is
// checked for spam bait and link shorteners.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::{SubAnalysis, Tally};
use crate::profile::{utf16_len, Profile};

const BASE_CONFIDENCE: f64 = 0.90;

/// How much a verification badge takes off the completeness score.
pub const VERIFIED_DISCOUNT: f64 = 0.60;

/// Bios with more emoji than this read as spam.
const EXCESSIVE_EMOJI: usize = 8;

static SPAM_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(dm|follow|message|win|giveaway|click|bio|link|money|earn|subscribe)")
        .expect("valid regex")
});
static LINK_SHORTENERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"bit\.ly|tinyurl|linkin\.bio|linktr\.ee").expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessDetails {
    pub has_full_name: bool,
    pub has_bio: bool,
    pub has_profile_image: bool,
    pub has_url: bool,
    pub has_highlights: bool,
    pub is_verified: bool,
    /// Score after the missing-field penalties and verification discount,
    /// before any bio content penalties
    pub field_score: f64,
    /// Present only when the bio is non-empty
    pub bio: Option<BioDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BioDetails {
    pub excessive_emoji: bool,
    pub spam_keywords: bool,
    pub suspicious_urls: bool,
}

pub fn analyze_completeness(profile: &Profile) -> SubAnalysis<CompletenessDetails> {
    let has_full_name = utf16_len(&profile.full_name) > 1;
    let has_bio = utf16_len(&profile.bio) > 10;
    let has_profile_image = !profile.profile_image.is_empty();
    let has_url = profile.has_external_url;
    let has_highlights = profile.has_highlights;
    let is_verified = profile.is_verified;

    let mut tally = Tally::new(BASE_CONFIDENCE);
    tally.add_if(!has_full_name, 0.20, 0.0);
    tally.add_if(!has_bio, 0.25, 0.0);
    tally.add_if(!has_profile_image, 0.40, 0.0);
    tally.add_if(!has_url && profile.followers_count > 1_000, 0.15, 0.0);
    tally.add_if(!has_highlights && profile.posts_count > 10, 0.10, 0.0);

    if is_verified {
        tally.set_score((tally.score() - VERIFIED_DISCOUNT).max(0.0));
        tally.add_if(true, 0.0, 0.10);
    }
    let field_score = tally.score();

    let bio = if profile.bio.is_empty() {
        None
    } else {
        let details = analyze_bio(&profile.bio);
        tally.add_if(details.excessive_emoji, 0.20, 0.0);
        tally.add_if(details.spam_keywords, 0.25, 0.0);
        tally.add_if(details.suspicious_urls, 0.30, 0.0);
        Some(details)
    };

    tally.finish(CompletenessDetails {
        has_full_name,
        has_bio,
        has_profile_image,
        has_url,
        has_highlights,
        is_verified,
        field_score,
        bio,
    })
}

fn analyze_bio(bio: &str) -> BioDetails {
    BioDetails {
        excessive_emoji: bio.chars().filter(|c| is_bio_emoji(*c)).count() > EXCESSIVE_EMOJI,
        spam_keywords: SPAM_KEYWORDS.is_match(bio),
        suspicious_urls: LINK_SHORTENERS.is_match(bio),
    }
}

/// Emoji block used for the bio spam check (Misc Symbols and Pictographs
/// through Supplemental Symbols and Pictographs).
fn is_bio_emoji(c: char) -> bool {
    matches!(c as u32, 0x1F300..=0x1F9FF)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Profile {
        Profile {
            full_name: "Maria Lopez".to_string(),
            bio: "Ceramicist. Teaching wheel classes in Porto.".to_string(),
            profile_image: "https://cdn.example.com/p/maria.jpg".to_string(),
            has_external_url: true,
            has_highlights: true,
            followers_count: 2_300,
            posts_count: 180,
            ..Profile::new("maria.makes")
        }
    }

    #[test]
    fn test_complete_profile_scores_zero() {
        let result = analyze_completeness(&complete());
        assert_eq!(result.score, 0.0);
        assert!((result.confidence - 0.90).abs() < 1e-9);
        assert!(result.details.bio.is_some());
    }

    #[test]
    fn test_short_name_and_bio_penalised() {
        let profile = Profile {
            full_name: "M".to_string(),
            bio: "pots".to_string(),
            ..complete()
        };
        let result = analyze_completeness(&profile);
        assert!(!result.details.has_full_name);
        assert!(!result.details.has_bio);
        assert!((result.score - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_url_penalty_needs_audience() {
        let small = Profile {
            has_external_url: false,
            followers_count: 900,
            ..complete()
        };
        assert_eq!(analyze_completeness(&small).score, 0.0);

        let large = Profile {
            has_external_url: false,
            followers_count: 1_001,
            ..complete()
        };
        assert!((analyze_completeness(&large).score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_bio_spam_checks() {
        let details = analyze_bio("🔥🔥🔥🔥🔥🔥🔥🔥🔥 DM me to WIN money! bit.ly/xyz");
        assert!(details.excessive_emoji);
        assert!(details.spam_keywords);
        assert!(details.suspicious_urls);
    }

    #[test]
    fn test_shorteners_are_case_sensitive() {
        assert!(!analyze_bio("see BIT.LY/abc").suspicious_urls);
    }

    #[test]
    fn test_eight_emoji_is_not_excessive() {
        assert!(!analyze_bio("🌸🌸🌸🌸🌸🌸🌸🌸").excessive_emoji);
    }
}
