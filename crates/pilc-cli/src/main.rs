//! pilc - Pi LC low-pass filter designer.

mod commands;
mod diagram;
mod export;
mod plot;
mod units;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pilc")]
#[command(author, version, about = "Pi LC low-pass filter designer", long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file to use instead of the user config directory
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a Pi ladder and print its component values
    Design(commands::design::DesignArgs),

    /// Print the magnitude response from fc/10 to fc*10
    Response(commands::response::ResponseArgs),

    /// Find the nearest E12/E24/E96 value for a component
    Match(commands::matching::MatchArgs),

    /// Explain a filter family in plain language
    Explain(commands::explain::ExplainArgs),

    /// List factory and saved designs
    Designs(commands::designs::DesignsArgs),
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Design(args) => commands::design::run(args, config),
        Commands::Response(args) => commands::response::run(args, config),
        Commands::Match(args) => commands::matching::run(args, config),
        Commands::Explain(args) => commands::explain::run(args),
        Commands::Designs(args) => commands::designs::run(args),
    }
}
