use clap::Parser;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use pecogit::context::pecogit_env::PecogitEnv;
use pecogit::error::PecogitError;

/// Every token, flags included, belongs to git: `pecogit --version` runs `git --version`.
#[derive(Parser)]
#[command(name = "pecogit")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// git subcommand and its arguments, e.g. `branch -a -n 20`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    args: Vec<String>,
}

/// Logs go to stderr, filtered by `PECOGIT_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("PECOGIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<String, PecogitError> {
    // Checked before touching HOME so a missing command is always a usage error
    if args.is_empty() {
        return Err(PecogitError::Usage);
    }
    let env = PecogitEnv::new()?;
    debug!("Using config {}", env.config_file().display());
    pecogit::run(args, &env)
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    trace!("Arguments: {:?}", cli.args);

    match run(cli.args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            // Errors go to stdout so they show up inside the selector
            println!("{e}");
            std::process::exit(1);
        }
    }
}
