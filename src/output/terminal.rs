// Colored terminal output for analyses, history and settings.
//
// This module handles all terminal-specific formatting: colors, tables,
// the score gauge. The main.rs command handlers delegate here.

use colored::{ColoredString, Colorize};

use super::badge::{needle_angle, ResultBadge};
use crate::db::models::{HistoryEntry, Settings};
use crate::profile::Profile;
use crate::scoring::analysis::{Analysis, AnalysisFactor};
use crate::scoring::verdict::FactorKind;

const GAUGE_WIDTH: usize = 30;

/// Display a full analysis report for one profile.
pub fn display_analysis(profile: &Profile, analysis: &Analysis, dark_mode: bool) {
    println!(
        "\n{}",
        format!("=== Analysis for @{} ===", profile.username).bold()
    );

    let badge = ResultBadge::from_score(analysis.score);
    println!("  {}", render_gauge(analysis.score, badge, dark_mode));
    println!(
        "  Score: {}/100  {}  Confidence: {}%",
        analysis.score,
        colorize_badge(badge, dark_mode),
        analysis.confidence
    );
    println!("  Verdict: {}", analysis.verdict.as_str().bold());

    println!(
        "\n  {} followers · {} following · {} posts{}{}",
        profile.followers_count,
        profile.following_count,
        profile.posts_count,
        if profile.is_verified { " · verified" } else { "" },
        if profile.is_private { " · private" } else { "" },
    );
    if !profile.bio.is_empty() {
        println!(
            "  Bio: {}",
            super::truncate_chars(&profile.bio, 100).dimmed()
        );
    }

    println!("\n  Factors:");
    for factor in &analysis.factors {
        display_factor(factor, dark_mode);
    }
    println!();
}

/// Display history as a table, newest first.
pub fn display_history(entries: &[HistoryEntry], dark_mode: bool) {
    if entries.is_empty() {
        println!("No analyses saved yet. Run `counterfeit analyze <profile.json>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== History ({} analyses) ===", entries.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<30} {:>5}  {:<12}  {:<28}  {:<19}",
        "#".dimmed(),
        "Username".dimmed(),
        "Score".dimmed(),
        "Badge".dimmed(),
        "Verdict".dimmed(),
        "Analyzed".dimmed(),
    );
    println!("  {}", "-".repeat(106).dimmed());

    for (i, entry) in entries.iter().enumerate() {
        let badge = ResultBadge::from_score(entry.analysis.score);
        println!(
            "  {:>4}. @{:<29} {:>5}  {:<12}  {:<28}  {:<19}",
            i + 1,
            super::truncate_chars(&entry.profile.username, 28),
            entry.analysis.score,
            colorize_badge(badge, dark_mode),
            entry.analysis.verdict.as_str(),
            entry.analyzed_at,
        );
    }

    println!();

    let fake = entries
        .iter()
        .filter(|e| ResultBadge::from_score(e.analysis.score) == ResultBadge::Fake)
        .count();
    let suspicious = entries
        .iter()
        .filter(|e| ResultBadge::from_score(e.analysis.score) == ResultBadge::Suspicious)
        .count();

    if fake > 0 {
        println!("  {} {} likely fake", "x".red().bold(), fake);
    }
    if suspicious > 0 {
        println!("  {} {} suspicious", "!".yellow(), suspicious);
    }
}

/// Display one stored analysis in full.
pub fn display_history_entry(entry: &HistoryEntry, dark_mode: bool) {
    display_analysis(&entry.profile, &entry.analysis, dark_mode);
    println!(
        "  {}",
        format!(
            "Analyzed {} at {} strictness",
            entry.analyzed_at, entry.strictness
        )
        .dimmed()
    );
}

pub fn display_settings(settings: &Settings) {
    println!("\n{}", "=== Settings ===".bold());
    println!(
        "  Strictness: {} ({})",
        settings.strictness,
        settings.strictness()
    );
    println!(
        "  Dark mode:  {}",
        if settings.dark_mode { "on" } else { "off" }
    );
}

fn display_factor(factor: &AnalysisFactor, dark_mode: bool) {
    let icon = match factor.kind {
        FactorKind::Good => "✓".green(),
        FactorKind::Warning => "!".yellow(),
        FactorKind::Bad => (if dark_mode { "✗".bright_red() } else { "✗".red() }).bold(),
    };
    println!(
        "    {} {} {}",
        icon,
        factor.title.bold(),
        format!("({})", factor.confidence).dimmed()
    );
    println!("      {}", factor.description.dimmed());
}

/// Render the gauge as a bar with the needle at the score's position.
fn render_gauge(score: u32, badge: ResultBadge, dark_mode: bool) -> String {
    // Needle angle runs -90..=90; map it back onto the bar.
    let fraction = (needle_angle(score) + 90.0) / 180.0;
    let needle = ((fraction * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH);

    let filled = "=".repeat(needle);
    let empty = ".".repeat(GAUGE_WIDTH - needle);
    format!(
        "[{}{}{}] {}%",
        colorize_for_badge(&filled, badge, dark_mode),
        "|".bold(),
        empty.dimmed(),
        score
    )
}

fn colorize_badge(badge: ResultBadge, dark_mode: bool) -> ColoredString {
    colorize_for_badge(badge.label(), badge, dark_mode)
}

fn colorize_for_badge(text: &str, badge: ResultBadge, dark_mode: bool) -> ColoredString {
    match (badge, dark_mode) {
        (ResultBadge::Real, false) => text.green(),
        (ResultBadge::Real, true) => text.bright_green(),
        (ResultBadge::Suspicious, false) => text.yellow(),
        (ResultBadge::Suspicious, true) => text.bright_yellow(),
        (ResultBadge::Fake, false) => text.red().bold(),
        (ResultBadge::Fake, true) => text.bright_red().bold(),
    }
}
