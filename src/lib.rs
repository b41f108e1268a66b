//! Turns `git` output into clean candidate lists for fuzzy selectors.
//!
//! `pecogit branch [args...] [-n <count>]` lists branches with remote
//! prefixes and the current-branch marker stripped, drops lines matching the
//! user's ignore list or containing characters outside a plain ASCII branch
//! name, and sorts the result. Any other subcommand is run as-is with its
//! output lines sorted.

pub mod candidate;
pub mod commands;
pub mod context;
pub mod display;
pub mod error;


use commands::Command;
use context::AppContext;
use context::pecogit_env::PecogitEnv;
use error::PecogitError;

/// Loads the config for `args`, runs the matching git command and formats its candidates.
pub fn run(args: Vec<String>, env: &PecogitEnv) -> Result<String, PecogitError> {
    let config = context::config::initialize(args, env)?;
    let command = commands::for_config(&config)?;
    let ctx = AppContext::builder().with_config(config).build();
    execute(command.as_ref(), &ctx)
}

pub fn execute(command: &dyn Command, ctx: &AppContext) -> Result<String, PecogitError> {
    let candidates = command.candidates(ctx)?;
    Ok(display::format_candidates(candidates))
}
