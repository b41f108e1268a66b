//! User configuration loaded from `config.json`
//!
//! The only recognized key is `ignores`, a list of literal substrings. Any
//! branch line containing one of them is dropped from the candidate list.
//! The file lives at `~/.config/pecogit/config.json` and is created with an
//! empty list on first run.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use super::pecogit_env::PecogitEnv;
use crate::error::PecogitError;

const DEFAULT_TEMPLATE: &str = "{\n    \"ignores\": []\n}\n";

/// On-disk shape of `config.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct IgnoreFile {
    ignores: Vec<String>,
}

/// Configuration for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Full argument list, command first
    pub args: Vec<String>,
    /// Literal substrings that disqualify a line
    pub ignores: Vec<String>,
    pub command: String,
}

impl Config {
    /// Returns false when the line contains any ignore substring.
    pub fn is_valid(&self, line: &str) -> bool {
        !self.ignores.iter().any(|ignore| line.contains(ignore.as_str()))
    }

    /// Arguments following the command name
    pub fn command_args(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }
}

/// Builds the run configuration from the process arguments.
///
/// Ensures the config directory and file exist, then reads the ignore list.
pub fn initialize(args: Vec<String>, env: &PecogitEnv) -> Result<Config, PecogitError> {
    let command = args.first().cloned().ok_or(PecogitError::Usage)?;

    ensure_config_file(env)?;
    let ignores = load_ignores(&env.config_file())?;

    Ok(Config {
        args,
        ignores,
        command,
    })
}

/// Creates the config directory and default template when missing
pub fn ensure_config_file(env: &PecogitEnv) -> Result<(), PecogitError> {
    let dir = env.config_dir();
    match fs::metadata(dir) {
        Ok(meta) if !meta.is_dir() => {
            return Err(PecogitError::ConfigNotDirectory(dir.to_path_buf()));
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Creating config directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| PecogitError::config(dir, e))?;
        }
        Err(e) => return Err(PecogitError::config(dir, e)),
    }

    let file = env.config_file();
    if !file.exists() {
        debug!("Writing default config to {}", file.display());
        fs::write(&file, DEFAULT_TEMPLATE).map_err(|e| PecogitError::config(&file, e))?;
    }

    Ok(())
}

/// Reads the ignore list from `path`.
///
/// Parsing is best-effort: a malformed or partially matching document yields
/// an empty list rather than an error, so a half-edited config never blocks
/// the branch list. Only I/O failures are reported.
pub fn load_ignores(path: &Path) -> Result<Vec<String>, PecogitError> {
    let content = fs::read_to_string(path).map_err(|e| PecogitError::config(path, e))?;
    debug!("Loaded config from {}", path.display());
    Ok(parse_ignores(&content, path))
}

fn parse_ignores(content: &str, path: &Path) -> Vec<String> {
    match serde_json::from_str::<IgnoreFile>(content) {
        Ok(file) => file.ignores,
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
