pub mod session;

pub use session::run_session;

use crate::config::SessionConfig;
use crate::error::{CliError, Result};
use roster_core::Roster;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Wait out the reveal delay. Returns `false` if interrupted with Ctrl-C.
pub async fn reveal_after(delay: Duration) -> bool {
    if delay.is_zero() {
        return true;
    }

    tokio::select! {
        _ = tokio::time::sleep(delay) => true,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Reveal interrupted");
            false
        }
    }
}

pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    tracing::info!("Wrote roster to {}", path.display());
    Ok(())
}

/// Build a roster from command-line names. A name spanning several lines
/// would not survive export as one line, so it is refused.
pub fn roster_from_args(names: &[String]) -> Result<Roster> {
    if let Some(name) = names.iter().find(|n| n.trim().contains(&['\n', '\r'][..])) {
        return Err(CliError::MultilineName(name.clone()));
    }
    Ok(Roster::from_names(names)?)
}

/// One-shot draw over names given on the command line
pub async fn draw_once(
    config: &SessionConfig,
    names: &[String],
    no_delay: bool,
    json: bool,
) -> Result<()> {
    let roster = roster_from_args(names)?;
    let selection = roster.draw()?;

    if !no_delay {
        println!("Drawing from {} participants...", roster.len());
        if !reveal_after(config.reveal_delay()).await {
            println!("Draw cancelled.");
            return Ok(());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        println!("{}", crate::messages::drawn(&selection.name));
    }

    Ok(())
}

/// One-shot export of names given on the command line
pub fn export_once(
    config: &SessionConfig,
    names: &[String],
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let roster = roster_from_args(names)?;
    let content = roster.export()?;
    let path = output.unwrap_or_else(|| config.export_path());

    write_export(&path, &content)?;
    println!("{}", crate::messages::exported(&path));
    Ok(path)
}
