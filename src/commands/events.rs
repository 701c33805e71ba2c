use agenda_core::clock::{Clock, SystemClock};
use agenda_core::filter::{FilterSelection, QuickFilter};
use agenda_core::group::group_by_day;
use agenda_core::session::SessionContext;
use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render::Render;

pub async fn run(
    session: &SessionContext,
    filters: &[String],
    date: Option<NaiveDate>,
) -> Result<()> {
    let mut selection = FilterSelection::new();
    for token in filters {
        match QuickFilter::from_token(token) {
            Some(filter) => selection.enable(filter),
            None => {
                println!("{}", format!("Ignoring unknown filter '{token}'").dimmed());
            }
        }
    }
    if let Some(date) = date {
        selection.select_date(date);
    }

    let client = ApiClient::new(&session.api_url);
    let events = client.list_events(&session.token).await?;

    let today = SystemClock.today();
    let visible: Vec<_> = events
        .into_iter()
        .filter(|event| selection.includes(event, today))
        .collect();

    if visible.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let sections = group_by_day(visible, today);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", section.render());
    }

    Ok(())
}
