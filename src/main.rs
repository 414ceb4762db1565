use clap::{Parser, Subcommand};
use index_navigator::commands::*;
use index_navigator::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "index-navigator")]
#[command(about = "Walk indexed repositories and compare files against their recorded state")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build or rebuild the index for repositories under a root directory
    Index {
        /// Directory to scan for git repositories
        root: PathBuf,
        /// Index snapshot location (defaults to the data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// List indexed repositories
    Repos {
        /// Index snapshot location (defaults to the data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Report files that changed since the index was built
    Check {
        /// Repository to check, by number, root path, or name (all when omitted)
        repo: Option<String>,
        /// Index snapshot location (defaults to the data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Browse the index interactively
    Browse {
        /// Index snapshot location (defaults to the data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Index { root, db } => {
            if let Err(e) = execute_index(root, db) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Repos { db } => {
            if let Err(e) = execute_repos(db) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Check { repo, db } => {
            if let Err(e) = execute_check(repo, db) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Browse { db } => {
            if let Err(e) = execute_browse(db) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
