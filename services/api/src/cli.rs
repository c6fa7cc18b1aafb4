use crate::assess::{run_assess, run_criteria, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placement_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Eligibility",
    about = "Check student profiles against company placement cutoffs",
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
    /// Assess a single student profile and print the results
    Assess(AssessArgs),
    /// Print the compiled-in company criteria table
    Criteria,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args).await,
        Command::Criteria => {
            run_criteria();
            Ok(())
        }
    }
}
