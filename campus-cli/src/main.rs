//! Campus CLI: content checking and querying.
//!
//! Commands:
//! - `check [file]` validate a content file and list its media references
//! - `dump` print content as TOML or JSON
//! - `services` / `news` list items the way the portal's tabs filter them
//! - `band` classify a viewport width

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use campus_cli::Format;

#[derive(Parser)]
#[command(name = "campus", about = "Campus portal content tools")]
struct Cli {
    /// Content file (TOML). Defaults to the built-in content.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate content and list its media references.
    Check {
        /// Content file to check; falls back to `--content`, then the
        /// built-in content.
        file: Option<PathBuf>,
    },
    /// Print the content.
    Dump {
        #[arg(long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
    /// List services.
    Services {
        /// Category id; all categories when omitted.
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text matched against title and description.
        #[arg(long)]
        query: Option<String>,
    },
    /// List news items.
    News {
        #[arg(long)]
        category: Option<String>,
    },
    /// Classify a viewport width in px.
    Band { width: u32 },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    if let Commands::Band { width } = cli.command {
        return campus_cli::band(width, &mut out);
    }
    let path = match &cli.command {
        Commands::Check { file: Some(file) } => Some(file.clone()),
        _ => cli.content.clone(),
    };

    let site = campus_cli::load_content(path.as_deref())?;
    match cli.command {
        Commands::Check { .. } => campus_cli::check(&site, &mut out),
        Commands::Dump { format } => campus_cli::dump(&site, format, &mut out),
        Commands::Services { category, query } => {
            campus_cli::services(&site, category.as_deref(), query.as_deref(), &mut out)
        }
        Commands::News { category } => campus_cli::news(&site, category.as_deref(), &mut out),
        Commands::Band { .. } => Ok(()),
    }
}
