use std::env;
use std::path::{Path, PathBuf};

use crate::error::PecogitError;

const APP_DIR: &str = "pecogit";
const CONFIG_FILE: &str = "config.json";

/// Resolves where pecogit keeps its per-user configuration.
///
/// Path resolution priority (highest to lowest):
/// 1. Builder override (test-only)
/// 2. `PECOGIT_CONFIG_HOME`
/// 3. `~/.config` (home taken from `HOME`, then `USERPROFILE`)
///
/// The app directory `pecogit` is always appended to the chosen base.
#[derive(Debug, Clone)]
pub struct PecogitEnv {
    config_dir: PathBuf,
}

impl PecogitEnv {
    pub fn new() -> Result<Self, PecogitError> {
        let config_dir = Self::resolve_config_dir(None)?;
        Ok(Self { config_dir })
    }

    #[cfg(test)]
    pub fn builder() -> PecogitEnvBuilder {
        PecogitEnvBuilder::new()
    }

    /// Directory holding `config.json`
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir(override_dir: Option<&PathBuf>) -> Result<PathBuf, PecogitError> {
        if let Some(config_dir) = override_dir {
            return Ok(config_dir.join(APP_DIR));
        }

        if let Ok(config_home) = env::var("PECOGIT_CONFIG_HOME") {
            return Ok(PathBuf::from(config_home).join(APP_DIR));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| PecogitError::NoHomeDirectory)?;

        Ok(PathBuf::from(home).join(".config").join(APP_DIR))
    }
}

/// Builder for creating PecogitEnv instances with custom values
#[cfg(test)]
#[derive(Default)]
pub struct PecogitEnvBuilder {
    config_dir: Option<PathBuf>,
}

#[cfg(test)]
impl PecogitEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base config directory; `pecogit` is appended
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn build(self) -> Result<PecogitEnv, PecogitError> {
        let config_dir = PecogitEnv::resolve_config_dir(self.config_dir.as_ref())?;
        Ok(PecogitEnv { config_dir })
    }
}
