use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use shareslice::core::{Market, log::init_logging};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for shareslice::AppCommand {
    fn from(cmd: Commands) -> shareslice::AppCommand {
        match cmd {
            Commands::Companies { market, query } => {
                shareslice::AppCommand::Companies { market, query }
            }
            Commands::Company { ticker } => shareslice::AppCommand::Company { ticker },
            Commands::Slice {
                ticker,
                shares,
                json,
            } => shareslice::AppCommand::Slice {
                ticker,
                shares,
                json,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List companies with reference data
    Companies {
        /// Market to list (US or AU), defaults to the configured market
        #[arg(short, long)]
        market: Option<Market>,

        /// Only show companies whose name or ticker contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Display company-wide figures and yields
    Company {
        /// Ticker, e.g. AAPL
        ticker: String,
    },
    /// Display your slice of a company's revenue, profit and dividends
    Slice {
        /// Ticker, e.g. AAPL
        ticker: String,

        /// Number of shares owned; separators such as "1,000" are accepted
        #[arg(allow_hyphen_values = true)]
        shares: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => shareslice::cli::setup::setup(),
        Some(cmd) => shareslice::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
