use super::Command;
use crate::context::AppContext;
use crate::error::PecogitError;

/// Runs any other git subcommand and hands back its output lines unfiltered.
pub struct PassthroughCommand;

impl Command for PassthroughCommand {
    fn candidates(&self, ctx: &AppContext) -> Result<Vec<String>, PecogitError> {
        let stdout = ctx.git_runner().output(&ctx.config().args)?;
        Ok(stdout.split('\n').map(str::to_string).collect())
    }
}
