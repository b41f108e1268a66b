pub mod config;
pub mod git_runner;
pub mod pecogit_env;

use config::Config;
use git_runner::{DefaultGitRunner, GitRunner};

use std::sync::Arc;

/// Everything a command needs for one run
#[derive(Clone)]
pub struct AppContext {
    config: Arc<Config>,
    git_runner: Arc<dyn GitRunner>,
}

impl AppContext {
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn git_runner(&self) -> Arc<dyn GitRunner> {
        Arc::clone(&self.git_runner)
    }
}

pub struct AppContextBuilder {
    config: Option<Config>,
    git_runner: Option<Arc<dyn GitRunner>>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            git_runner: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_git_runner(mut self, git_runner: Arc<dyn GitRunner>) -> Self {
        self.git_runner = Some(git_runner);
        self
    }

    pub fn build(self) -> AppContext {
        AppContext {
            config: Arc::new(self.config.unwrap_or_default()),
            git_runner: self
                .git_runner
                .unwrap_or_else(|| Arc::new(DefaultGitRunner::new())),
        }
    }
}

impl Default for AppContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
