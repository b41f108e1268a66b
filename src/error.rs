use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PecogitError {
    /// No git subcommand was given on the command line
    #[error("Command is required.")]
    Usage,

    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("Config error at {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config path {} exists but is not a directory", .0.display())]
    ConfigNotDirectory(PathBuf),

    #[error("{0}")]
    Argument(String),

    /// git could not be spawned or exited unsuccessfully
    #[error("failed to exec git {}: {detail}", .args.join(" "))]
    Subprocess { args: Vec<String>, detail: String },
}

impl PecogitError {
    pub fn config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    pub fn subprocess(args: &[String], detail: impl Into<String>) -> Self {
        Self::Subprocess {
            args: args.to_vec(),
            detail: detail.into(),
        }
    }
}
