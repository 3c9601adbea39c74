use anyhow::Result;
use clap::{Parser, Subcommand};
use rehab::cli::{MonthArgs, calendar};

/// rehab - routine and therapy calendars
#[derive(Parser)]
#[command(name = "rehab")]
#[command(about = "Month calendars for assigned routines and therapy sessions", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month grid and agenda
    Calendar(MonthArgs),
    /// Count sessions by status for the month
    Summary(MonthArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = rehab::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    rehab::observability::init_observability(&config.logging)?;

    match cli.command {
        Commands::Calendar(args) => calendar::show(&config, args),
        Commands::Summary(args) => calendar::summary(&config, args),
    }
}
