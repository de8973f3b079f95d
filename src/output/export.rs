// Export — one analysis written out as a standalone JSON document.
//
// The document carries the username, when it was analyzed, and the
// score/verdict/factors of the result. Keys are camelCase.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::db::models::HistoryEntry;
use crate::scoring::analysis::{Analysis, AnalysisFactor};
use crate::scoring::verdict::Verdict;

/// Timestamp layout SQLite's `datetime('now')` writes into the history table.
const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub username: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-03-01T18:00:00.000Z`.
    pub analyzed_at: String,
    pub score: u32,
    pub verdict: Verdict,
    pub factors: Vec<AnalysisFactor>,
}

impl ExportRecord {
    pub fn new(username: &str, analysis: &Analysis, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            username: username.to_string(),
            analyzed_at: analyzed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            score: analysis.score,
            verdict: analysis.verdict,
            factors: analysis.factors.clone(),
        }
    }

    /// Build the record for a saved analysis, keeping its original timestamp.
    pub fn from_history(entry: &HistoryEntry) -> Result<Self> {
        let analyzed_at = parse_stored_timestamp(&entry.analyzed_at)?;
        Ok(Self::new(&entry.profile.username, &entry.analysis, analyzed_at))
    }
}

/// File name used when no explicit export path is given.
pub fn default_export_name(username: &str) -> String {
    format!("ig-analysis-{username}.json")
}

/// Write the record as pretty-printed JSON, replacing any existing file.
pub fn write_export(path: &Path, record: &ExportRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    tracing::info!(
        username = %record.username,
        path = %path.display(),
        "Exported analysis"
    );
    Ok(())
}

/// Parse a history timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
pub fn parse_stored_timestamp(stored: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(stored, STORED_TIMESTAMP_FORMAT)
        .with_context(|| format!("Unrecognised history timestamp: {stored}"))?;
    Ok(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_name() {
        assert_eq!(default_export_name("jane.doe"), "ig-analysis-jane.doe.json");
    }

    #[test]
    fn test_parse_stored_timestamp() {
        let parsed = parse_stored_timestamp("2024-03-01 18:00:05").unwrap();
        assert_eq!(
            parsed.to_rfc3339_opts(SecondsFormat::Millis, true),
            "2024-03-01T18:00:05.000Z"
        );
        assert!(parse_stored_timestamp("yesterday").is_err());
    }
}
