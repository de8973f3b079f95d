// Data models — Rust structs that map to database rows.
//
// These are the types that flow between the store and the rest of the app.
// They're kept apart from the queries so other modules can use them without
// depending on rusqlite directly.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::scoring::analysis::Analysis;
use crate::scoring::weights::Strictness;

/// History keeps only this many analyses, newest first.
pub const HISTORY_LIMIT: usize = 20;

/// One past analysis: the profile as it was scored and the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub profile: Profile,
    pub analysis: Analysis,
    /// Strictness the analysis was run at
    pub strictness: Strictness,
    /// When the analysis was saved (SQLite `datetime('now')`, UTC)
    pub analyzed_at: String,
}

/// User preferences persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
    /// Stored as the raw 1-3 level so unrecognised values survive a round trip
    pub strictness: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            strictness: Strictness::Balanced.level(),
        }
    }
}

impl Settings {
    pub fn strictness(&self) -> Strictness {
        Strictness::from_level(self.strictness)
    }
}
