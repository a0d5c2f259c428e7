//! Loftbook CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! loftbook-cli migrate
//!
//! # Seed the database with demo club records
//! loftbook-cli seed
//! loftbook-cli seed -u mara -p hunter2
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with a demo member, club, pigeons and a race

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "loftbook-cli")]
#[command(author, version, about = "Loftbook CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with demo club records
    Seed {
        /// Username for the demo member account
        #[arg(short, long, default_value = "demo")]
        username: String,

        /// Password for the demo member account
        #[arg(short, long, default_value = "loftbook-demo")]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { username, password } => {
            commands::seed::run(&username, &password).await?;
        }
    }
    Ok(())
}
