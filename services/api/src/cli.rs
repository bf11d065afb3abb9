use crate::demo::{run_assessment, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use enterprise_verify::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Enterprise Verification",
    about = "Score company reputation risk and serve the verification API",
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
    /// Score a single company and print its risk report
    Assess(AssessArgs),
    /// Verify the demonstration company list and print a score table
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
    /// Override the simulated verification latency in milliseconds
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
