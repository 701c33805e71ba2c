use std::fs;
use std::path::PathBuf;

use agenda_core::protocol::CreateEventPayload;
use agenda_core::session::SessionContext;
use anyhow::{Context, Result};
use base64::Engine;
use chrono::{NaiveDate, SecondsFormat};
use clap::Args;

use crate::client::ApiClient;

#[derive(Args)]
pub struct NewArgs {
    /// Event name
    pub name: String,

    /// Event date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: NaiveDate,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub instagram: String,

    #[arg(long, default_value = "")]
    pub website: String,

    #[arg(long, default_value = "")]
    pub ticket_link: String,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub price: String,

    /// Image file to upload with the event
    #[arg(long)]
    pub image: Option<PathBuf>,
}

pub async fn run(session: &SessionContext, args: NewArgs) -> Result<()> {
    if !session.is_admin {
        anyhow::bail!("Creating events requires an admin account");
    }

    let image = match &args.image {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read image from {}", path.display()))?;
            base64::engine::general_purpose::STANDARD.encode(bytes)
        }
        None => String::new(),
    };

    let date = args
        .date
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    let payload = CreateEventPayload {
        name: args.name.clone(),
        description: args.description,
        instagram: args.instagram,
        website: args.website,
        ticket_link: args.ticket_link,
        address: args.address,
        city: args.city,
        price: args.price,
        date,
        image,
    };

    let client = ApiClient::new(&session.api_url);
    client.create_event(&session.token, &payload).await?;

    println!("Event '{}' created.", args.name);

    Ok(())
}
