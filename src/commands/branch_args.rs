use crate::error::PecogitError;

const LIMIT_FLAG: &str = "-n";

/// `git branch` arguments with pecogit's own `-n <count>` pulled out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchArgs {
    /// Tokens forwarded to `git branch`, in their original order
    pub passthrough: Vec<String>,
    /// Maximum number of candidates to keep; `None` keeps everything
    pub limit: Option<usize>,
}

impl BranchArgs {
    /// Splits `-n <count>` from the rest of the arguments.
    ///
    /// Zero or a negative count means no limit. A later `-n` overrides an earlier one.
    pub fn parse(args: &[String]) -> Result<Self, PecogitError> {
        let mut passthrough = Vec::with_capacity(args.len());
        let mut limit = None;

        let mut tokens = args.iter();
        while let Some(arg) = tokens.next() {
            if arg != LIMIT_FLAG {
                passthrough.push(arg.clone());
                continue;
            }

            let value = tokens
                .next()
                .ok_or_else(|| PecogitError::Argument("-n requires number".to_string()))?;
            let count: i64 = value.parse().map_err(|e| {
                PecogitError::Argument(format!("-n requires number, not {value}.\n{e}"))
            })?;
            limit = usize::try_from(count).ok().filter(|&count| count > 0);
        }

        Ok(Self { passthrough, limit })
    }

    /// Full argument vector for git, starting with `branch`
    pub fn git_args(&self) -> Vec<String> {
        std::iter::once("branch".to_string())
            .chain(self.passthrough.iter().cloned())
            .collect()
    }
}
