use std::env;

use anyhow::{Context, Result};

use crate::scoring::weights::Strictness;

pub const DEFAULT_DB_PATH: &str = "./counterfeit.db";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// Strictness used when neither the command line nor the stored
    /// settings pick one.
    pub default_strictness: Strictness,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// COUNTERFEIT_STRICTNESS must be an integer if set. Levels other than
    /// 1 and 3 resolve to balanced.
    pub fn load() -> Result<Self> {
        let default_strictness = match env::var("COUNTERFEIT_STRICTNESS") {
            Ok(raw) => {
                let level: i64 = raw.trim().parse().with_context(|| {
                    format!("COUNTERFEIT_STRICTNESS must be an integer, got {:?}", raw)
                })?;
                Strictness::from_level(level)
            }
            Err(_) => Strictness::default(),
        };

        Ok(Self {
            db_path: env::var("COUNTERFEIT_DB_PATH")
                .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            default_strictness,
        })
    }
}
