use std::ops::ControlFlow;
use tracing::{debug, trace};

use super::Command;
use super::branch_args::BranchArgs;
use crate::candidate;
use crate::context::AppContext;
use crate::error::PecogitError;

/// Lists branches through the normalize-and-filter pipeline.
pub struct BranchCommand {
    pub args: BranchArgs,
}

impl BranchCommand {
    pub fn new(args: &[String]) -> Result<Self, PecogitError> {
        Ok(Self {
            args: BranchArgs::parse(args)?,
        })
    }
}

impl Command for BranchCommand {
    fn candidates(&self, ctx: &AppContext) -> Result<Vec<String>, PecogitError> {
        let config = ctx.config();
        let limit = self.args.limit;
        let mut accepted = Vec::new();

        ctx.git_runner()
            .stream_lines(&self.args.git_args(), &mut |line: &str| {
                match candidate::accept(config, line) {
                    Ok(candidate) => accepted.push(candidate),
                    Err(reason) => trace!("Rejected {line:?}: {reason:?}"),
                }
                match limit {
                    Some(max) if accepted.len() >= max => {
                        debug!("Reached limit of {max} candidates");
                        ControlFlow::Break(())
                    }
                    _ => ControlFlow::Continue(()),
                }
            })?;

        Ok(accepted)
    }
}
