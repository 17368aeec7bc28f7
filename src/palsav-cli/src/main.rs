mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::handle(&args),

        Commands::Generate { table, out_dir } => commands::generate::handle(table, &out_dir),

        Commands::Configure {
            request_url,
            token,
            show,
        } => commands::configure::handle(request_url, token, show),
    };

    if let Err(ref err) = result {
        tracing::error!("{:#}", err);
    }
    result
}
