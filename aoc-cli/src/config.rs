//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use crate::error::CliError;
use crate::submit::SanityLimits;
use chrono::Datelike;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Event year
    pub year: u16,
    /// Cache file path
    pub cache_file: PathBuf,
    /// Session token (zeroized on drop)
    pub session: Zeroizing<String>,
    /// Sanity-check thresholds for submissions
    pub limits: SanityLimits,
    /// Skip confirmation prompts
    pub assume_yes: bool,
}

impl Config {
    /// Build config from CLI args, failing fast when the session token is
    /// missing from the environment
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let session = std::env::var("AOC_SESSION")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                CliError::Config("Missing AOC_SESSION environment variable.".to_string())
            })?;

        Ok(Config {
            year: args.year.unwrap_or_else(latest_event_year),
            cache_file: expand_tilde(&args.cache_file),
            session: Zeroizing::new(session),
            limits: SanityLimits::default(),
            assume_yes: args.yes,
        })
    }
}

/// The most recent AoC event: this year's once December starts, last year's before
fn latest_event_year() -> u16 {
    let now = chrono::Local::now();
    let year = now.year() as u16;
    if now.month() == 12 { year } else { year - 1 }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
        if path_str == "~" {
            return home;
        }
    }
    path.to_path_buf()
}
