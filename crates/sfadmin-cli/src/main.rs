mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sfadmin")]
#[command(version, about = "SF-Admin CLI - inspect dashboard views and format values", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "sfadmin.toml")]
    config: PathBuf,

    /// Don't print the startup banner
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered views and their module ids
    Routes,

    /// Resolve a view key through the filesystem loader
    Resolve {
        /// View key, e.g. views/system/permission/menu
        key: String,
    },

    /// Format a timestamp or date string with a template
    Time {
        /// Epoch seconds, epoch milliseconds, or a date string
        value: String,

        /// Template such as "{y}-{m}-{d} {h}:{i}:{s}"
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Describe how long ago a timestamp was
    Ago {
        /// Epoch seconds or epoch milliseconds
        value: String,

        /// Template used once the value is older than two days
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Parse the query string of a URL
    Query {
        url: String,
    },

    /// Show the icon name for a filename
    Icon {
        filename: String,
    },

    /// Format a byte count
    Size {
        bytes: u64,

        /// Decimal places (negative counts as zero)
        #[arg(short, long, allow_negative_numbers = true)]
        decimals: Option<i32>,
    },

    /// Convert identifier case
    Case {
        /// Target style
        #[arg(value_enum)]
        style: CaseStyle,

        name: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CaseStyle {
    /// camelCase, dropping "views"
    Hump,
    /// snake_case
    Line,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    debug!("Loaded configuration from {:?}", cli.config);

    if !cli.quiet {
        sfadmin_utils::print_banner();
    }

    // Execute command
    match cli.command {
        Commands::Routes => {
            commands::routes::list(&config)?;
        }
        Commands::Resolve { key } => {
            commands::routes::resolve(&config, &key).await?;
        }
        Commands::Time { value, format } => {
            commands::format::time(&config, &value, format.as_deref())?;
        }
        Commands::Ago { value, format } => {
            commands::format::ago(&config, &value, format.as_deref())?;
        }
        Commands::Query { url } => {
            commands::format::query(&url)?;
        }
        Commands::Icon { filename } => {
            commands::format::icon(&filename);
        }
        Commands::Size { bytes, decimals } => {
            commands::format::size(&config, bytes, decimals);
        }
        Commands::Case { style, name } => {
            commands::format::case(style, &name);
        }
    }

    Ok(())
}
