// Extractor helpers — turning scraped page text into profile numbers.
//
// The page extractor itself (DOM access) lives outside this crate. These are
// the pure pieces of it: parsing abbreviated counts and deriving the
// auxiliary metrics that ride along with a profile.

use super::{utf16_len, Profile, ProfileMetrics};

/// Parse a scraped count like "1,234", "1.2K", "3M" or "2b".
///
/// Commas are stripped and K/M/B suffixes (either case) scale the number.
/// Returns `None` for anything that isn't a non-negative number.
pub fn parse_count(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let (number, multiplier) = match cleaned.chars().last() {
        Some('k' | 'K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m' | 'M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        Some('b' | 'B') => (&cleaned[..cleaned.len() - 1], 1_000_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier).round() as u64)
}

/// Whether a character falls in the pictographic ranges counted as emoji
/// when deriving profile metrics.
pub fn is_pictographic(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1F5FF | 0x1F600..=0x1F64F | 0x1F680..=0x1FAFF | 0x2600..=0x27BF
    )
}

/// Derive the auxiliary metrics from the profile's own fields.
///
/// `engagement` can't be computed from the profile page alone, so it is
/// carried over from whatever the profile already holds.
pub fn derive_metrics(profile: &Profile) -> ProfileMetrics {
    let username = &profile.username;

    let follower_to_following_ratio = if profile.following_count > 0 {
        profile.followers_count as f64 / profile.following_count as f64
    } else {
        0.0
    };
    let posts_per_follower = if profile.followers_count > 0 {
        profile.posts_count as f64 / profile.followers_count as f64
    } else {
        0.0
    };

    ProfileMetrics {
        engagement: profile.profile_metrics.engagement,
        posts_per_follower,
        follower_to_following_ratio,
        username_length: utf16_len(username),
        has_numbers: username.chars().any(|c| c.is_ascii_digit()),
        // Counted per UTF-16 unit, like the length.
        special_chars_count: username
            .encode_utf16()
            .filter(|u| !matches!(*u, 0x30..=0x39 | 0x41..=0x5A | 0x61..=0x7A | 0x5F))
            .count(),
        underscores_count: username.chars().filter(|c| *c == '_').count(),
        has_bio_links: profile.bio.contains("http") || profile.bio.contains("www."),
        emoji_count: profile.bio.chars().filter(|c| is_pictographic(*c)).count(),
    }
}
