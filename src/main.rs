/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, resolves the
/// database location, and dispatches to the command handlers. The registry
/// is constructed here and passed down explicitly; there is no global state.

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use tracing::info;

use habit_tracker_cli::commands;
use habit_tracker_cli::{HabitRegistry, Periodicity, SqliteStore};

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about = "Track recurring habits and their streaks", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Create {
        /// Habit name (unique)
        name: String,
        /// How often the habit recurs
        #[arg(value_enum)]
        periodicity: Periodicity,
    },
    /// Mark a habit as completed now
    Complete {
        /// Name of the habit to complete
        name: String,
    },
    /// List all tracked habits
    List,
    /// Show per-habit streak summaries
    Analytics,
}

/// Resolve the default database path, preferring the user's home directory
fn default_database_path() -> Result<PathBuf, std::io::Error> {
    let base = dirs::home_dir()
        .or_else(dirs::data_dir)
        .unwrap_or(std::env::current_dir()?);

    let dir = base.join(".habit_tracker");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("habits.db"))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = match cli.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let store = SqliteStore::new(&db_path)?;
    let mut registry = HabitRegistry::new(store)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Create { name, periodicity } => commands::create(&mut registry, &name, periodicity)?,
        Command::Complete { name } => commands::complete(&mut registry, &name)?,
        Command::List => commands::list(&registry, &mut out)?,
        Command::Analytics => commands::analytics(&registry, &mut out)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output on stdout stays clean
    let log_level = if cli.verbose {
        "debug"
    } else if cli.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker_cli={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
