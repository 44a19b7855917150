use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roadrunner::error::AppError;

use crate::demo::{run_demo, run_score, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "RoadRunner Underwriting",
    about = "Run the RoadRunner loan underwriting service and scoring tools",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an applicant profile from a JSON file without storing anything
    Score(ScoreArgs),
    /// Run an end-to-end CLI demo: seeded dashboard plus one full intake
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Preload the in-memory store with sample applications for the dashboard
    #[arg(long)]
    pub(crate) seed_demo: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to an applicant profile JSON document
    pub(crate) profile: PathBuf,
    /// Optional scoring policy JSON overriding the canonical defaults
    #[arg(long)]
    pub(crate) policy: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
