// Content analysis — post volume and posting cadence.
//
// Scheduled bots post on a clock: the gaps between posts barely vary.
// Bulk-upload accounts post in bursts minutes apart. Both show up in the
// statistics of the gaps between the most recent post timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SubAnalysis, Tally};
use crate::profile::Profile;

const BASE_CONFIDENCE: f64 = 0.75;

/// Cadence statistics need at least this many timestamps (two gaps).
const MIN_DATES_FOR_CADENCE: usize = 3;

/// Coefficient of variation below which posting looks scheduled.
const REGULAR_CV_THRESHOLD: f64 = 0.1;

/// Gaps shorter than this count towards burst posting.
const BURST_GAP_MS: f64 = 5.0 * 60.0 * 1000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDetails {
    pub no_content: bool,
    pub minimal_content: bool,
    pub suspicious_private: bool,
    pub regular_posting: bool,
    pub burst_posting: bool,
    pub cadence: Option<CadenceStats>,
}

/// Gap statistics over the recent post timestamps, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceStats {
    pub mean_gap_ms: f64,
    pub std_dev_ms: f64,
    pub short_gaps: usize,
    pub total_gaps: usize,
}

impl CadenceStats {
    /// Compute gap statistics, or `None` with fewer than three timestamps.
    ///
    /// Timestamps are sorted newest-first so every gap is non-negative.
    /// Standard deviation is the population form (divide by n).
    pub fn from_dates(dates: &[DateTime<Utc>]) -> Option<Self> {
        if dates.len() < MIN_DATES_FOR_CADENCE {
            return None;
        }

        let mut sorted = dates.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let gaps: Vec<f64> = sorted
            .windows(2)
            .map(|pair| (pair[0] - pair[1]).num_milliseconds() as f64)
            .collect();

        let n = gaps.len() as f64;
        let mean_gap_ms = gaps.iter().sum::<f64>() / n;
        let variance = gaps.iter().map(|g| (g - mean_gap_ms).powi(2)).sum::<f64>() / n;
        let short_gaps = gaps.iter().filter(|g| **g < BURST_GAP_MS).count();

        Some(Self {
            mean_gap_ms,
            std_dev_ms: variance.sqrt(),
            short_gaps,
            total_gaps: gaps.len(),
        })
    }

    /// Coefficient of variation. Undefined (`None`) when every post landed
    /// at the same instant.
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        if self.mean_gap_ms > 0.0 {
            Some(self.std_dev_ms / self.mean_gap_ms)
        } else {
            None
        }
    }

    pub fn is_regular(&self) -> bool {
        self.coefficient_of_variation()
            .is_some_and(|cv| cv < REGULAR_CV_THRESHOLD)
    }

    /// More than half of all gaps are under five minutes.
    pub fn is_bursty(&self) -> bool {
        self.short_gaps as f64 > self.total_gaps as f64 * 0.5
    }
}

pub fn analyze_content(profile: &Profile) -> SubAnalysis<ContentDetails> {
    let posts = profile.posts_count;
    let mut tally = Tally::new(BASE_CONFIDENCE);

    let no_content = tally.add_if(posts == 0, 0.50, 0.20);
    let minimal_content = tally.add_if(posts < 3, 0.30, 0.15);
    let suspicious_private = tally.add_if(profile.is_private && posts < 3, 0.35, 0.10);

    let cadence = CadenceStats::from_dates(&profile.post_dates);
    let (regular_posting, burst_posting) = match &cadence {
        Some(stats) => (
            tally.add_if(stats.is_regular(), 0.40, 0.20),
            tally.add_if(stats.is_bursty(), 0.45, 0.15),
        ),
        None => (false, false),
    };

    tally.finish(ContentDetails {
        no_content,
        minimal_content,
        suspicious_private,
        regular_posting,
        burst_posting,
        cadence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn spaced(count: usize, gap: Duration) -> Vec<DateTime<Utc>> {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        (0..count).map(|i| start + gap * i as i32).collect()
    }

    #[test]
    fn test_cadence_needs_three_dates() {
        assert!(CadenceStats::from_dates(&spaced(2, Duration::hours(1))).is_none());
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut dates = spaced(4, Duration::minutes(30));
        let forward = CadenceStats::from_dates(&dates).unwrap();
        dates.reverse();
        dates.swap(1, 2);
        let shuffled = CadenceStats::from_dates(&dates).unwrap();
        assert_eq!(forward, shuffled);
        assert!((forward.mean_gap_ms - 1_800_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_timestamps_are_bursty_not_regular() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let stats = CadenceStats::from_dates(&[start, start, start]).unwrap();
        assert!(stats.coefficient_of_variation().is_none());
        assert!(!stats.is_regular());
        assert!(stats.is_bursty());
    }

    #[test]
    fn test_irregular_gaps_are_not_regular() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let dates = [
            start,
            start + Duration::hours(2),
            start + Duration::days(3),
            start + Duration::days(9),
        ];
        let stats = CadenceStats::from_dates(&dates).unwrap();
        assert!(!stats.is_regular());
        assert!(!stats.is_bursty());
    }
}
