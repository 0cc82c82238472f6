//! CLI Adapter.

mod render;
mod resolve;
mod update;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::app::commands::{Strategy, VariableRequest};
use crate::domain::AppError;

/// Environment variable holding a tracing filter directive (e.g. `dashvars=debug`).
const LOG_ENV: &str = "DASHVARS_LOG";

#[derive(Parser)]
#[command(name = "dashvars")]
#[command(version)]
#[command(
    about = "Substitute bundle catalog/schema variables into metrics dashboards",
    long_about = None
)]
struct Cli {
    /// Project root containing databricks.yml
    /// (default: current directory, or its parent when run inside src/)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    project_root: Option<PathBuf>,
    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update the dashboard's catalog/schema parameters in place
    #[clap(visible_alias = "u")]
    Update {
        #[command(flatten)]
        target: TargetArgs,
        /// How to resolve variables
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Bundle)]
        strategy: StrategyArg,
        /// Dashboard file, relative to the project root
        #[arg(short, long, value_name = "PATH")]
        dashboard: Option<PathBuf>,
    },
    /// Render a dashboard template by replacing CATALOG_NAME/SCHEMA_NAME
    #[clap(visible_alias = "r")]
    Render {
        #[command(flatten)]
        target: TargetArgs,
        /// How to resolve variables
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Static)]
        strategy: StrategyArg,
        /// Template file, relative to the project root
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,
        /// Output file, relative to the project root
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the resolved catalog and schema
    #[clap(visible_alias = "rv")]
    Resolve {
        #[command(flatten)]
        target: TargetArgs,
        /// How to resolve variables
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Bundle)]
        strategy: StrategyArg,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Bundle target name (dev, prod, etc.)
    #[arg(short, long)]
    target: String,
    /// CLI profile to authenticate with
    #[arg(short, long)]
    profile: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Read variable defaults from databricks.yml
    Static,
    /// Resolve variables with `databricks bundle validate`
    Bundle,
}

impl TargetArgs {
    fn into_request(self, strategy: StrategyArg) -> VariableRequest {
        let strategy = match strategy {
            StrategyArg::Static => Strategy::Static,
            StrategyArg::Bundle => Strategy::Bundle,
        };
        VariableRequest::new(self.target, self.profile, strategy)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = project_root(cli.project_root).and_then(|root| {
        tracing::debug!(root = %root.display(), "project root");
        match cli.command {
            Commands::Update { target, strategy, dashboard } => {
                update::run_update(root, target.into_request(strategy), dashboard)
            }
            Commands::Render { target, strategy, template, output } => {
                render::run_render(root, target.into_request(strategy), template, output)
            }
            Commands::Resolve { target, strategy, json } => {
                resolve::run_resolve(root, target.into_request(strategy), json)
            }
        }
    });

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn project_root(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(root) => Ok(root),
        None => crate::app::api::current_project_root(),
    }
}

fn report_error(error: &AppError) {
    eprintln!("❌ Error: {}", error);
    let mut remedy = error.remedy().into_iter();
    if let Some(first) = remedy.next() {
        eprintln!("💡 Solution: {}", first);
    }
    for line in remedy {
        eprintln!("{}", line);
    }
}

fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
