// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across other .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{HistoryEntry, Settings};
use super::traits::Database;
use crate::profile::Profile;
use crate::scoring::analysis::Analysis;
use crate::scoring::weights::Strictness;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn save_analysis(
        &self,
        profile: &Profile,
        analysis: &Analysis,
        strictness: Strictness,
    ) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::save_analysis(&conn, profile, analysis, strictness)
    }

    async fn get_history(&self, limit: u32) -> Result<Vec<HistoryEntry>> {
        let conn = self.conn.lock().await;
        super::queries::get_history(&conn, limit)
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<HistoryEntry>> {
        let conn = self.conn.lock().await;
        super::queries::get_by_username(&conn, username)
    }

    async fn history_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::history_count(&conn)
    }

    async fn clear_history(&self) -> Result<usize> {
        let conn = self.conn.lock().await;
        super::queries::clear_history(&conn)
    }

    async fn get_settings(&self) -> Result<Settings> {
        let conn = self.conn.lock().await;
        super::queries::get_settings(&conn)
    }

    async fn has_settings(&self) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::has_settings(&conn)
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::save_settings(&conn, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;
    use crate::scoring::analysis::analyze;

    async fn test_db() -> SqliteDatabase {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteDatabase::new(conn)
    }

    #[tokio::test]
    async fn test_trait_table_count() {
        let db = test_db().await;
        assert_eq!(db.table_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_trait_history_roundtrip() {
        let db = test_db().await;
        let profile = Profile {
            followers_count: 90,
            following_count: 4_000,
            posts_count: 0,
            ..Profile::new("follow4follow")
        };
        let analysis = analyze(&profile, Strictness::Strict).unwrap();

        let id = db
            .save_analysis(&profile, &analysis, Strictness::Strict)
            .await
            .unwrap();
        assert!(id > 0);
        assert_eq!(db.history_count().await.unwrap(), 1);

        let found = db.get_by_username("FOLLOW4FOLLOW").await.unwrap().unwrap();
        assert_eq!(found.analysis.score, analysis.score);
        assert_eq!(found.strictness, Strictness::Strict);

        assert_eq!(db.clear_history().await.unwrap(), 1);
        assert!(db.get_history(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trait_settings_roundtrip() {
        let db = test_db().await;
        assert_eq!(db.get_settings().await.unwrap(), Settings::default());
        let settings = Settings {
            dark_mode: true,
            strictness: 1,
        };
        db.save_settings(&settings).await.unwrap();
        assert!(db.has_settings().await.unwrap());
        assert_eq!(db.get_settings().await.unwrap(), settings);
    }
}
