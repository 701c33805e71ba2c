use agenda_core::clock::{Clock, SystemClock};
use agenda_core::filter::MapFilter;
use agenda_core::session::SessionContext;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render::render_pin;

pub async fn run(session: &SessionContext, filter: &str) -> Result<()> {
    let filter = MapFilter::from_token(filter).ok_or_else(|| {
        anyhow::anyhow!("Unknown map filter '{filter}'. Use today, tomorrow or weekend")
    })?;

    let client = ApiClient::new(&session.api_url);

    // The map centers on the user's preferred city when one is set.
    let user = client.me(&session.token).await?;
    if let Some(city) = &user.preferred_city {
        println!("{}", format!("Events near {city}").bold());
    }

    let events = client.list_events(&session.token).await?;

    let today = SystemClock.today();
    let pins: Vec<_> = events
        .into_iter()
        .filter(|event| filter.includes(event, today))
        .collect();

    if pins.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &pins {
        println!("{}", render_pin(event));
    }

    Ok(())
}
