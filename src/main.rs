use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use counterfeit::config::Config;
use counterfeit::db::models::Settings;
use counterfeit::db::Database;
use counterfeit::output::export::{default_export_name, write_export, ExportRecord};
use counterfeit::profile::{extract, ExtractedProfile, Profile};
use counterfeit::scoring::analysis::analyze;
use counterfeit::scoring::weights::Strictness;

/// Counterfeit: fake-profile likelihood scoring.
///
/// Reads a profile record produced by the page extractor and estimates how
/// likely the account is to be fake, with a per-category explanation.
#[derive(Parser)]
#[command(name = "counterfeit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Analyze a profile record (JSON file, or `-` for stdin)
    Analyze {
        /// Path to the extractor's JSON output
        input: PathBuf,

        /// Strictness level: 1 lenient, 2 balanced, 3 strict
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=3))]
        strictness: Option<i64>,

        /// Print the analysis as JSON instead of the coloured report
        #[arg(long)]
        json: bool,

        /// Don't record the analysis in history
        #[arg(long)]
        no_save: bool,

        /// Recompute profile metrics from the record's own fields
        #[arg(long)]
        derive_metrics: bool,

        /// Also write the result as JSON (default name: ig-analysis-<username>.json)
        #[arg(long, value_name = "PATH")]
        export: Option<Option<PathBuf>>,
    },

    /// List recent analyses, newest first
    History {
        /// Number of entries to show (default: 20)
        #[arg(long, default_value = "20")]
        limit: u32,
    },

    /// Show the most recent analysis of a username
    Show {
        /// The username to look up (case-insensitive, leading @ optional)
        username: String,

        /// Also write the saved result as JSON (default name: ig-analysis-<username>.json)
        #[arg(long, value_name = "PATH")]
        export: Option<Option<PathBuf>>,
    },

    /// Delete all saved analyses
    Clear,

    /// Show or update settings
    Settings {
        /// Default strictness level: 1 lenient, 2 balanced, 3 strict
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=3))]
        strictness: Option<i64>,

        /// Use the brighter palette for dark terminals
        #[arg(long)]
        dark_mode: Option<bool>,
    },

    /// Show system status (DB stats, settings, latest analysis)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("counterfeit=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Counterfeit database...");
            let config = Config::load()?;
            let db = counterfeit::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nCounterfeit is ready. Next step: analyze a profile record");
            println!("  counterfeit analyze profile.json");
        }

        Commands::Analyze {
            input,
            strictness,
            json,
            no_save,
            derive_metrics,
            export,
        } => {
            let config = Config::load()?;
            let options = AnalyzeOptions {
                input,
                strictness,
                json,
                no_save,
                derive_metrics,
                export,
            };

            if let Err(e) = run_analyze(&config, options).await {
                eprintln!("{}", "Analysis failed".red().bold());
                for cause in e.chain() {
                    eprintln!("  {}", cause.to_string().dimmed());
                }
                std::process::exit(1);
            }
        }

        Commands::History { limit } => {
            let config = Config::load()?;
            let db = counterfeit::db::open_sqlite(&config.db_path)?;
            let settings = db.get_settings().await?;
            let entries = db.get_history(limit).await?;
            counterfeit::output::terminal::display_history(&entries, settings.dark_mode);
        }

        Commands::Show { username, export } => {
            let config = Config::load()?;
            let db = counterfeit::db::open_sqlite(&config.db_path)?;
            let settings = db.get_settings().await?;

            // Strip leading @ if present
            let username = username.strip_prefix('@').unwrap_or(&username);

            match db.get_by_username(username).await? {
                Some(entry) => {
                    counterfeit::output::terminal::display_history_entry(
                        &entry,
                        settings.dark_mode,
                    );
                    if let Some(path) = export {
                        let record = ExportRecord::from_history(&entry)?;
                        let path = export_path(path, &record.username);
                        write_export(&path, &record)?;
                        println!("Exported to {}", path.display());
                    }
                }
                None => {
                    println!("No saved analysis for @{username}.");
                }
            }
        }

        Commands::Clear => {
            let config = Config::load()?;
            let db = counterfeit::db::open_sqlite(&config.db_path)?;
            let removed = db.clear_history().await?;
            println!("Cleared {removed} saved analyses.");
        }

        Commands::Settings {
            strictness,
            dark_mode,
        } => {
            let config = Config::load()?;
            let db = counterfeit::db::initialize_sqlite(&config.db_path)?;
            let mut settings = load_settings(&db, &config).await?;

            if strictness.is_some() || dark_mode.is_some() {
                if let Some(level) = strictness {
                    settings.strictness = level;
                }
                if let Some(dark) = dark_mode {
                    settings.dark_mode = dark;
                }
                db.save_settings(&settings).await?;
                println!("{}", "Settings saved.".bold());
            }

            counterfeit::output::terminal::display_settings(&settings);
        }

        Commands::Status => {
            let config = Config::load()?;
            if !Path::new(&config.db_path).exists() {
                println!("Database: not initialized");
                println!("\nRun `counterfeit init` to set up the database.");
                return Ok(());
            }
            let db = counterfeit::db::open_sqlite(&config.db_path)?;
            counterfeit::status::show(&db, &config.db_path).await?;
        }
    }

    Ok(())
}

struct AnalyzeOptions {
    input: PathBuf,
    strictness: Option<i64>,
    json: bool,
    no_save: bool,
    derive_metrics: bool,
    export: Option<Option<PathBuf>>,
}

/// Read, score, display and (optionally) save one profile record.
async fn run_analyze(config: &Config, options: AnalyzeOptions) -> Result<()> {
    let raw_json = read_input(&options.input)?;
    let record: ExtractedProfile =
        serde_json::from_str(&raw_json).context("Input is not a valid profile record")?;

    let mut profile = match Profile::try_from(record) {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "Rejected profile record");
            return Err(e).context("Profile record could not be scored");
        }
    };

    if options.derive_metrics {
        profile.profile_metrics = extract::derive_metrics(&profile);
    }

    // Without saving, the store is read-only: never create it just to look
    // up settings.
    let db = match (options.no_save, options.strictness) {
        (true, Some(_)) => None,
        (true, None) => counterfeit::db::open_existing_sqlite(&config.db_path)?,
        (false, _) => Some(counterfeit::db::initialize_sqlite(&config.db_path)?),
    };

    let settings = match &db {
        Some(db) => load_settings(db, config).await?,
        None => Settings {
            strictness: config.default_strictness.level(),
            ..Settings::default()
        },
    };
    let strictness = options
        .strictness
        .map(Strictness::from)
        .unwrap_or_else(|| settings.strictness());

    let analysis = analyze(&profile, strictness)?;
    let analyzed_at = Utc::now();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        counterfeit::output::terminal::display_analysis(&profile, &analysis, settings.dark_mode);
    }

    if let (Some(db), false) = (&db, options.no_save) {
        db.save_analysis(&profile, &analysis, strictness).await?;
        if !options.json {
            println!("{}", "Saved to history.".dimmed());
        }
    }

    if let Some(path) = options.export {
        let record = ExportRecord::new(&profile.username, &analysis, analyzed_at);
        let path = export_path(path, &record.username);
        write_export(&path, &record)?;
        if !options.json {
            println!("Exported to {}", path.display());
        }
    }

    Ok(())
}

/// A bare `--export` means the default file name in the working directory.
fn export_path(path: Option<PathBuf>, username: &str) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(default_export_name(username)))
}

/// Read the record from a file, or from stdin when the path is `-`.
fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read profile record from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read profile record from {}", input.display()))
    }
}

/// Stored settings, or the configured defaults when none have been saved.
async fn load_settings(db: &Arc<dyn Database>, config: &Config) -> Result<Settings> {
    if db.has_settings().await? {
        db.get_settings().await
    } else {
        Ok(Settings {
            strictness: config.default_strictness.level(),
            ..Settings::default()
        })
    }
}
