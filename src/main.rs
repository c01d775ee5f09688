use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;

use jsref::app::{App, AppEvent};
use jsref::catalog;
use jsref::config::Config;
use jsref::highlight::SyntectHighlighter;
use jsref::preferences::PreferenceManager;
use jsref::query::{self, FilteredView};
use jsref::storage::{Database, DatabaseError};
use jsref::ui;

/// Get the config directory path (~/.config/jsref/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("jsref");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "jsref", about = "Terminal reference browser for JavaScript features")]
struct Args {
    /// Use an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Clear all stored preferences before starting
    #[arg(long)]
    reset_prefs: bool,

    /// Print the catalog (optionally filtered by QUERY) and exit
    #[arg(long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    list: Option<String>,

    /// With --list, print JSON instead of text
    #[arg(long, requires = "list")]
    json: bool,
}

/// Print a filtered view grouped by category.
fn print_listing(view: &FilteredView<'_>, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, view).context("Failed to encode listing")?;
        writeln!(out)?;
        return Ok(());
    }

    if view.is_empty() {
        writeln!(out, "No matching features")?;
        return Ok(());
    }
    for group in view.groups() {
        writeln!(out, "{} ({})", group.category, group.features.len())?;
        for feature in &group.features {
            writeln!(out, "  {:<24} {}", feature.id, feature.title)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with --list output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let features = catalog::builtin();
    let duplicates = catalog::duplicate_ids(features);
    if !duplicates.is_empty() {
        tracing::warn!(ids = ?duplicates, "Catalog contains duplicate ids; first record wins");
    }

    if let Some(query) = &args.list {
        let view = query::filter(features, query);
        return print_listing(&view, args.json);
    }

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        tracing::info!(path = %config_dir.display(), "Created config directory");
    }

    // Set directory permissions on Unix (user-only access)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o700);
        if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
            tracing::warn!(
                path = %config_dir.display(),
                error = %e,
                "Failed to set config directory permissions to 0700"
            );
        }
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| config_dir.join("config.toml"));
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Open the preference database; without it preferences live in memory only
    let db_path = config_dir.join("prefs.db");
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => Some(db),
        Err(DatabaseError::InstanceLocked) => {
            tracing::warn!(path = %db_path.display(), "Preference database is locked by another instance");
            eprintln!("Warning: another jsref is running; preferences will not be saved this session.");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Preference database unavailable, using config only");
            None
        }
    };

    if args.reset_prefs {
        match &db {
            Some(db) => {
                let removed = db
                    .clear_preferences()
                    .await
                    .context("Failed to reset preferences")?;
                tracing::info!(removed, "Preferences reset");
                eprintln!("Preferences reset.");
            }
            None => eprintln!("No preference database to reset."),
        }
    }

    let prefs = match &db {
        Some(db) => match PreferenceManager::load(&config, db).await {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load stored preferences, using config only");
                PreferenceManager::from_config(&config)
            }
        },
        None => PreferenceManager::from_config(&config),
    };

    let highlighter = SyntectHighlighter::new(prefs.syntax_theme_dark(), prefs.syntax_theme_light());
    let mut app = App::new(features, prefs, db, Box::new(highlighter));

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
