//! Core CLI definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palsav")]
#[command(about = "Palworld world save structurer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a decoded world save into players/guilds JSON
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Regenerate the reference tables from the upstream dataset
    #[command(visible_alias = "g")]
    Generate {
        /// Which table to regenerate
        #[arg(long, value_enum, default_value_t = Table::All)]
        table: Table,

        /// Directory holding the generated table modules
        #[arg(long, default_value = "src/palsav/src/reference")]
        out_dir: PathBuf,
    },

    /// Configure default push settings
    Configure {
        /// Set the default push base URL
        #[arg(long)]
        request_url: Option<String>,

        /// Set the default push bearer token
        #[arg(long)]
        token: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Decoded save tree to convert (JSON from the external decoder)
    #[arg(short, long, default_value = "Level.sav.json")]
    pub file: PathBuf,

    /// Output file path (.json suffix is enforced)
    #[arg(short, long, default_value = "structure.json")]
    pub output: PathBuf,

    /// Push base URL; when set, data is sent to <url>/player and <url>/guild
    /// instead of being written to the output file
    #[arg(short, long)]
    pub request: Option<String>,

    /// Bearer token for the push target
    #[arg(short, long)]
    pub token: Option<String>,

    /// Delete the input file after conversion
    #[arg(short, long)]
    pub clear: bool,
}

/// Reference tables the generator can rebuild
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Table {
    PalType,
    PalSkills,
    All,
}
