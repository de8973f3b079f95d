// System status display — shows DB stats, stored settings, latest analysis.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::Database;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_display_path: &str) -> Result<()> {
    if !Path::new(db_display_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `counterfeit init` to set up the database.");
        return Ok(());
    }

    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);

    if db.has_settings().await? {
        let settings = db.get_settings().await?;
        println!(
            "Settings: {} strictness, dark mode {}",
            settings.strictness(),
            if settings.dark_mode { "on" } else { "off" }
        );
    } else {
        println!("Settings: defaults (none saved)");
    }

    let count = db.history_count().await?;
    println!("History: {} saved analyses", count);

    match db.get_history(1).await?.first() {
        Some(latest) => {
            println!(
                "Latest: @{} scored {} ({}) at {}",
                latest.profile.username,
                latest.analysis.score,
                latest.analysis.verdict,
                latest.analyzed_at
            );
        }
        None => {
            println!("Latest: none yet");
            println!("  Run `counterfeit analyze <profile.json>` to score a profile");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
