// Unit tests for the fixed tables: verdict buckets, factor buckets,
// strictness weights, the result badge, and truncate_chars UTF-8 safety.

use counterfeit::output::badge::{needle_angle, ResultBadge};
use counterfeit::output::truncate_chars;
use counterfeit::scoring::verdict::{Category, FactorKind, Verdict};
use counterfeit::scoring::weights::{resolve_weights, Strictness};

// ============================================================
// Verdict::from_score — boundary conditions
// ============================================================

#[test]
fn verdict_high_confidence_boundaries() {
    let cases = [
        (0, Verdict::GenuineHighConfidence),
        (24, Verdict::GenuineHighConfidence),
        (25, Verdict::SuspiciousHighConfidence),
        (64, Verdict::SuspiciousHighConfidence),
        (65, Verdict::FakeHighConfidence),
        (100, Verdict::FakeHighConfidence),
    ];
    for (score, expected) in cases {
        assert_eq!(Verdict::from_score(score, 85), expected, "score {score}");
    }
}

#[test]
fn verdict_hedged_boundaries() {
    let cases = [
        (0, Verdict::LikelyGenuine),
        (24, Verdict::LikelyGenuine),
        (25, Verdict::PotentiallySuspicious),
        (64, Verdict::PotentiallySuspicious),
        (65, Verdict::LikelyFake),
        (100, Verdict::LikelyFake),
    ];
    for (score, expected) in cases {
        assert_eq!(Verdict::from_score(score, 84), expected, "score {score}");
    }
}

#[test]
fn verdict_confidence_threshold_is_inclusive() {
    assert!(Verdict::from_score(50, 85).is_high_confidence());
    assert!(!Verdict::from_score(50, 84).is_high_confidence());
    assert!(Verdict::from_score(50, 100).is_high_confidence());
    assert!(!Verdict::from_score(50, 0).is_high_confidence());
}

#[test]
fn verdict_serializes_as_label() {
    let json = serde_json::to_string(&Verdict::FakeHighConfidence).unwrap();
    assert_eq!(json, "\"Fake (High Confidence)\"");
    assert_eq!(Verdict::PotentiallySuspicious.to_string(), "Potentially Suspicious");
}

// ============================================================
// FactorKind::from_sub_score — strict inequalities
// ============================================================

#[test]
fn factor_kind_boundaries() {
    assert_eq!(FactorKind::from_sub_score(0.0), FactorKind::Good);
    assert_eq!(FactorKind::from_sub_score(0.3), FactorKind::Good);
    assert_eq!(FactorKind::from_sub_score(0.31), FactorKind::Warning);
    assert_eq!(FactorKind::from_sub_score(0.7), FactorKind::Warning);
    assert_eq!(FactorKind::from_sub_score(0.71), FactorKind::Bad);
    assert_eq!(FactorKind::from_sub_score(1.0), FactorKind::Bad);
}

#[test]
fn every_category_has_three_distinct_labels() {
    for category in Category::ALL {
        let good = category.label(FactorKind::Good);
        let warning = category.label(FactorKind::Warning);
        let bad = category.label(FactorKind::Bad);
        assert_ne!(good.0, warning.0);
        assert_ne!(warning.0, bad.0);
        assert_ne!(good.0, bad.0);
    }
}

// ============================================================
// Strictness weights
// ============================================================

#[test]
fn weights_grow_with_strictness() {
    let lenient = resolve_weights(Strictness::Lenient);
    let balanced = resolve_weights(Strictness::Balanced);
    let strict = resolve_weights(Strictness::Strict);

    let fields = |w: &counterfeit::scoring::weights::WeightSet| {
        [w.username, w.followers, w.content, w.completeness, w.engagement]
    };
    for ((l, b), s) in fields(&lenient)
        .into_iter()
        .zip(fields(&balanced))
        .zip(fields(&strict))
    {
        assert!(l < b && b < s, "expected {l} < {b} < {s}");
    }
}

#[test]
fn balanced_weights_match_table() {
    let w = resolve_weights(Strictness::Balanced);
    assert_eq!(w.username, 2.2);
    assert_eq!(w.followers, 2.8);
    assert_eq!(w.content, 2.0);
    assert_eq!(w.completeness, 1.6);
    assert_eq!(w.engagement, 2.5);
}

#[test]
fn strictness_level_mapping() {
    assert_eq!(Strictness::from_level(1), Strictness::Lenient);
    assert_eq!(Strictness::from_level(2), Strictness::Balanced);
    assert_eq!(Strictness::from_level(3), Strictness::Strict);
    assert_eq!(Strictness::from_level(7), Strictness::Balanced);
    assert_eq!(Strictness::Strict.level(), 3);
}

// ============================================================
// ResultBadge and gauge
// ============================================================

#[test]
fn badge_boundaries() {
    assert_eq!(ResultBadge::from_score(29), ResultBadge::Real);
    assert_eq!(ResultBadge::from_score(30), ResultBadge::Suspicious);
    assert_eq!(ResultBadge::from_score(69), ResultBadge::Suspicious);
    assert_eq!(ResultBadge::from_score(70), ResultBadge::Fake);
}

#[test]
fn badge_and_verdict_buckets_differ() {
    // 27 is already suspicious for the verdict but still real for the badge.
    assert_eq!(ResultBadge::from_score(27), ResultBadge::Real);
    assert_eq!(
        Verdict::from_score(27, 90),
        Verdict::SuspiciousHighConfidence
    );
}

#[test]
fn needle_angle_clamps_above_hundred() {
    assert_eq!(needle_angle(25), -45.0);
    assert_eq!(needle_angle(150), 90.0);
}

// ============================================================
// truncate_chars — UTF-8 safety
// ============================================================

#[test]
fn truncate_short_string_unchanged() {
    assert_eq!(truncate_chars("hello", 10), "hello");
}

#[test]
fn truncate_exact_length_unchanged() {
    assert_eq!(truncate_chars("hello", 5), "hello");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate_chars("hello world", 5), "hello...");
}

#[test]
fn truncate_emoji_bio() {
    let bio = "📷🌍✈️🎉 travel & photos";
    let result = truncate_chars(bio, 3);
    assert_eq!(result, "📷🌍✈...");
}

#[test]
fn truncate_empty_string() {
    assert_eq!(truncate_chars("", 5), "");
}
