// Database trait — backend-agnostic async interface for the history store.
//
// Implementor: SqliteDatabase (wraps rusqlite). All methods are async so a
// sync backend behind a Mutex and a native async backend fit the same
// interface.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{HistoryEntry, Settings};
use crate::profile::Profile;
use crate::scoring::analysis::Analysis;
use crate::scoring::weights::Strictness;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- History ---

    /// Save an analysis and prune history to the newest entries. Returns its ID.
    async fn save_analysis(
        &self,
        profile: &Profile,
        analysis: &Analysis,
        strictness: Strictness,
    ) -> Result<i64>;

    /// Get up to `limit` analyses, newest first.
    async fn get_history(&self, limit: u32) -> Result<Vec<HistoryEntry>>;

    /// Get the newest analysis of a username (case-insensitive).
    async fn get_by_username(&self, username: &str) -> Result<Option<HistoryEntry>>;

    /// Number of stored analyses.
    async fn history_count(&self) -> Result<i64>;

    /// Remove all history. Returns the number of entries removed.
    async fn clear_history(&self) -> Result<usize>;

    // --- Settings ---

    /// Load settings, with defaults for anything never saved.
    async fn get_settings(&self) -> Result<Settings>;

    /// Whether settings have ever been saved.
    async fn has_settings(&self) -> Result<bool>;

    async fn save_settings(&self, settings: &Settings) -> Result<()>;
}
