//! Grouping filtered events into ordered, labeled day sections.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::Event;

/// One calendar day's worth of events, with a display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<Event>,
}

/// Bucket events by calendar day, ascending, preserving input order within
/// each day.
///
/// Callers pass events that already went through filtering, so every event
/// carries a date; an undated event here is a programming error. Grouping
/// itself never fails, and an empty input yields no sections.
pub fn group_by_day(events: Vec<Event>, today: NaiveDate) -> Vec<Section> {
    let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();

    for event in events {
        debug_assert!(
            event.date.is_some(),
            "group_by_day expects date-filtered events"
        );
        let Some(date) = event.date else { continue };
        days.entry(date.date_naive()).or_default().push(event);
    }

    days.into_iter()
        .map(|(date, events)| Section {
            date,
            label: day_label(date, today),
            events,
        })
        .collect()
}

/// Human-readable label for a day: "Today", "Tomorrow", or e.g.
/// "Thursday, Jun 5".
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A, %b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn event(id: &str, date: &str) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {id}"),
            latitude: 48.8566,
            longitude: 2.3522,
            image_url: None,
            price: None,
            date: Some(
                DateTime::parse_from_rfc3339(date)
                    .unwrap()
                    .with_timezone(&Utc),
            ),
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_sections_ascend_by_day_regardless_of_input_order() {
        let today = day("2024-06-06");
        let events = vec![
            event("later", "2024-06-08T10:00:00Z"),
            event("now", "2024-06-06T22:00:00Z"),
            event("next", "2024-06-07T09:00:00Z"),
        ];

        let sections = group_by_day(events, today);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, "Today");
        assert_eq!(sections[1].label, "Tomorrow");
        assert_eq!(sections[2].label, "Saturday, Jun 8");
        assert!(sections.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_intra_section_order_follows_input_order() {
        let today = day("2024-06-06");
        let events = vec![
            event("b", "2024-06-07T22:00:00Z"),
            event("a", "2024-06-07T09:00:00Z"),
        ];

        let sections = group_by_day(events, today);

        assert_eq!(sections.len(), 1);
        let ids: Vec<_> = sections[0].events.iter().map(|e| e.id.as_str()).collect();
        // No time-of-day sort: input order is preserved.
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_no_event_is_lost_or_duplicated() {
        let today = day("2024-06-06");
        let events = vec![
            event("1", "2024-06-06T10:00:00Z"),
            event("2", "2024-06-08T10:00:00Z"),
            event("3", "2024-06-06T18:00:00Z"),
            event("4", "2024-06-20T18:00:00Z"),
        ];

        let sections = group_by_day(events.clone(), today);

        let mut flattened: Vec<_> = sections
            .iter()
            .flat_map(|s| s.events.iter().map(|e| e.id.clone()))
            .collect();
        flattened.sort();
        assert_eq!(flattened, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        let sections = group_by_day(Vec::new(), day("2024-06-06"));
        assert!(sections.is_empty());
    }

    #[test]
    fn test_grouping_is_idempotent_for_identical_inputs() {
        let today = day("2024-06-06");
        let events = vec![
            event("1", "2024-06-07T10:00:00Z"),
            event("2", "2024-06-06T10:00:00Z"),
        ];

        let first = group_by_day(events.clone(), today);
        let second = group_by_day(events, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_day_label_formats_distant_days_with_weekday_and_date() {
        let today = day("2024-06-06");
        assert_eq!(day_label(day("2024-06-06"), today), "Today");
        assert_eq!(day_label(day("2024-06-07"), today), "Tomorrow");
        assert_eq!(day_label(day("2025-06-05"), today), "Thursday, Jun 5");
        // Past days also get the long form.
        assert_eq!(day_label(day("2024-06-05"), today), "Wednesday, Jun 5");
    }
}
