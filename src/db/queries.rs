// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{HistoryEntry, Settings, HISTORY_LIMIT};
use crate::profile::Profile;
use crate::scoring::analysis::Analysis;
use crate::scoring::weights::Strictness;

// --- Analysis history ---

/// Record an analysis, then prune history down to the newest entries.
///
/// Returns the new entry's ID.
pub fn save_analysis(
    conn: &Connection,
    profile: &Profile,
    analysis: &Analysis,
    strictness: Strictness,
) -> Result<i64> {
    let profile_json = serde_json::to_string(profile)?;
    let analysis_json = serde_json::to_string(analysis)?;

    conn.execute(
        "INSERT INTO analysis_history
            (username, score, verdict, profile_json, analysis_json, strictness, analyzed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime('now'))",
        params![
            profile.username,
            analysis.score,
            analysis.verdict.as_str(),
            profile_json,
            analysis_json,
            strictness.level(),
        ],
    )?;
    let id = conn.last_insert_rowid();

    // IDs are monotonic, so "newest" is "highest ID" even when two saves
    // land in the same second.
    conn.execute(
        "DELETE FROM analysis_history
         WHERE id NOT IN (SELECT id FROM analysis_history ORDER BY id DESC LIMIT ?1)",
        params![HISTORY_LIMIT as i64],
    )?;

    Ok(id)
}

/// Raw history row before the JSON columns are decoded.
type HistoryRow = (i64, String, String, i64, String);

const HISTORY_COLUMNS: &str = "id, profile_json, analysis_json, strictness, analyzed_at";

fn read_history_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn decode_history_row(
    (id, profile_json, analysis_json, strictness, analyzed_at): HistoryRow,
) -> Result<HistoryEntry> {
    let profile: Profile = serde_json::from_str(&profile_json)
        .with_context(|| format!("Corrupt profile JSON in history entry {id}"))?;
    let analysis: Analysis = serde_json::from_str(&analysis_json)
        .with_context(|| format!("Corrupt analysis JSON in history entry {id}"))?;
    Ok(HistoryEntry {
        id,
        profile,
        analysis,
        strictness: Strictness::from_level(strictness),
        analyzed_at,
    })
}

/// Get the most recent analyses, newest first.
pub fn get_history(conn: &Connection, limit: u32) -> Result<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {HISTORY_COLUMNS} FROM analysis_history ORDER BY id DESC LIMIT ?1"
    ))?;
    let rows = stmt
        .query_map(params![limit], read_history_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    rows.into_iter().map(decode_history_row).collect()
}

/// Find the newest analysis of a username (case-insensitive).
pub fn get_by_username(conn: &Connection, username: &str) -> Result<Option<HistoryEntry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {HISTORY_COLUMNS} FROM analysis_history
         WHERE username = ?1 COLLATE NOCASE
         ORDER BY id DESC LIMIT 1"
    ))?;
    let row = stmt
        .query_row(params![username], read_history_row)
        .optional()?;
    row.map(decode_history_row).transpose()
}

/// Count stored analyses.
pub fn history_count(conn: &Connection) -> Result<i64> {
    let count: i64 =
        conn.query_row("SELECT COUNT(*) FROM analysis_history", [], |row| row.get(0))?;
    Ok(count)
}

/// Delete all history. Returns how many entries were removed.
pub fn clear_history(conn: &Connection) -> Result<usize> {
    let removed = conn.execute("DELETE FROM analysis_history", [])?;
    Ok(removed)
}

// --- Settings ---

const DARK_MODE_KEY: &str = "dark_mode";
const STRICTNESS_KEY: &str = "strictness";

fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get(0)).optional()?;
    Ok(result)
}

fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Whether any settings have been saved yet.
pub fn has_settings(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))?;
    Ok(count > 0)
}

/// Load settings, falling back to defaults for anything never saved.
pub fn get_settings(conn: &Connection) -> Result<Settings> {
    let defaults = Settings::default();

    let dark_mode = match get_setting(conn, DARK_MODE_KEY)? {
        Some(value) => value == "true",
        None => defaults.dark_mode,
    };
    let strictness = match get_setting(conn, STRICTNESS_KEY)? {
        Some(value) => value
            .parse()
            .with_context(|| format!("Stored strictness '{value}' is not a number"))?,
        None => defaults.strictness,
    };

    Ok(Settings {
        dark_mode,
        strictness,
    })
}

/// Save both settings.
pub fn save_settings(conn: &Connection, settings: &Settings) -> Result<()> {
    set_setting(conn, DARK_MODE_KEY, &settings.dark_mode.to_string())?;
    set_setting(conn, STRICTNESS_KEY, &settings.strictness.to_string())?;
    Ok(())
}
