use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod config;
mod error;
mod output;
mod parser;
mod session;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("freetime=debug")
    } else {
        EnvFilter::new("freetime=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    config.validate()?;

    match cli.command {
        Commands::Signin(args) => cli::signin::execute(&config, args).await,
        Commands::Signup(args) => cli::signup::execute(&config, args).await,
        Commands::Generate(args) => cli::generate::execute(&config, args).await,
        Commands::History(args) => cli::history::execute(&config, args).await,
        Commands::Signout => cli::signout::execute(),
        Commands::Schema => cli::schema::execute(),
    }
}
