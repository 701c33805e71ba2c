mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::new::NewArgs;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Browse and publish community events from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the events backend
    Login {
        email: String,

        /// Backend API base URL
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// List events grouped by day (calendar view)
    Events {
        /// Quick filter: today, tomorrow, friday, saturday, sunday (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Only events on this date (YYYY-MM-DD); overrides quick filters
        #[arg(long, conflicts_with = "filters")]
        date: Option<NaiveDate>,
    },
    /// Show event pins for the map view
    Map {
        /// One of: today, tomorrow, weekend
        #[arg(short, long, default_value = "today")]
        filter: String,
    },
    /// Create a new event (admins only)
    New(NewArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, api_url } => commands::login::run(&email, api_url).await,
        Commands::Logout => commands::logout::run(),
        Commands::Events { filters, date } => {
            let session = config::require_session()?;
            commands::events::run(&session, &filters, date).await
        }
        Commands::Map { filter } => {
            let session = config::require_session()?;
            commands::map::run(&session, &filter).await
        }
        Commands::New(args) => {
            let session = config::require_session()?;
            commands::new::run(&session, args).await
        }
    }
}
