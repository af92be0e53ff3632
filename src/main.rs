//! CLI entry point for quire

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quire")]
#[command(version)]
#[command(about = "A Markdown content-record store with front matter validation", long_about = None)]
struct Cli {
    /// Set the store root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate all records and report authoring defects
    #[command(alias = "c")]
    Check {
        /// Exit non-zero when any defect is found
        #[arg(long)]
        strict: bool,
    },

    /// List store content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (record, tag, category)
        #[arg(default_value = "record")]
        r#type: String,

        /// Include draft records
        #[arg(long)]
        drafts: bool,
    },

    /// Scaffold a new content record
    New {
        /// Title of the new record
        title: String,

        /// Create as a draft
        #[arg(long)]
        draft: bool,

        /// Category for the new record
        #[arg(long)]
        category: Option<String>,

        /// Tags for the new record (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quire=debug,info"
    } else {
        "quire=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine store root
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let quire = quire::Quire::new(&base_dir)?;

    match cli.command {
        Commands::Check { strict } => {
            quire::commands::check::run(&quire, strict)?;
        }

        Commands::List { r#type, drafts } => {
            quire::commands::list::run(&quire, &r#type, drafts)?;
        }

        Commands::New {
            title,
            draft,
            category,
            tag,
        } => {
            let path = quire::commands::new::run(&quire, &title, draft, category.as_deref(), &tag)?;
            println!("Created {:?}", path);
        }
    }

    Ok(())
}
