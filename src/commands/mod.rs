use crate::context::AppContext;
use crate::context::config::Config;
use crate::error::PecogitError;

pub mod branch;
pub mod branch_args;
pub mod passthrough;

pub use branch::BranchCommand;
pub use passthrough::PassthroughCommand;

/// A git subcommand that produces a list of candidates.
pub trait Command: Send + Sync {
    fn candidates(&self, ctx: &AppContext) -> Result<Vec<String>, PecogitError>;
}

/// Picks the command for `config.command`: `branch` is filtered, anything else passes through.
pub fn for_config(config: &Config) -> Result<Box<dyn Command>, PecogitError> {
    match config.command.as_str() {
        "branch" => Ok(Box::new(BranchCommand::new(config.command_args())?)),
        _ => Ok(Box::new(PassthroughCommand)),
    }
}
