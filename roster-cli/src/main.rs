mod commands;
mod config;
mod error;
mod messages;
mod notify;

use clap::{Parser, Subcommand};
use config::SessionConfig;
use error::CliError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keep a list of names and draw one at random")]
#[command(version)]
struct Cli {
    /// Session settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory exported lists are written to
    #[arg(short, long, global = true)]
    export_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Session {
        /// Clear without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Draw one of the given names
    Draw {
        /// Participant names
        names: Vec<String>,
        /// Reveal immediately
        #[arg(long)]
        no_delay: bool,
        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Write the given names to a text file, one per line
    Export {
        /// Participant names
        names: Vec<String>,
        /// Output file (defaults to <export-dir>/roster.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }
    config.verbose |= cli.verbose;

    // Initialize logging
    let log_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "roster={},roster_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = cli.command.unwrap_or(Commands::Session { yes: false });

    // Execute command
    let result = match command {
        Commands::Session { yes } => commands::run_session(config, yes).await,
        Commands::Draw {
            names,
            no_delay,
            json,
        } => commands::draw_once(&config, &names, no_delay, json).await,
        Commands::Export { names, output } => {
            commands::export_once(&config, &names, output).map(|_| ())
        }
    };

    if let Err(e) = result {
        match e {
            CliError::Roster(err) => {
                eprintln!("Error: {}", messages::describe(&err));
            }
            CliError::Dialog(msg) => {
                eprintln!("Error: prompt failed: {}", msg);
                eprintln!("Use 'roster draw <names...>' when not running in a terminal");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
