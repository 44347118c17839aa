use crate::demo::{run_demo, run_jurisdictions_list, DemoArgs};
use crate::server;
use civic_eligibility::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Civic Eligibility Checker",
    about = "Run and demonstrate the civic-registration eligibility checker from the command line",
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
    /// Inspect the jurisdiction rule table
    Jurisdictions {
        #[command(subcommand)]
        command: JurisdictionsCommand,
    },
    /// Walk a scripted questionnaire session and print the verdict
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JurisdictionsCommand {
    /// Print the selectable jurisdictions in table order
    List,
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
        Command::Jurisdictions {
            command: JurisdictionsCommand::List,
        } => run_jurisdictions_list(),
        Command::Demo(args) => run_demo(args),
    }
}
