//! Filter predicate evaluation.
//!
//! Two filter vocabularies exist, matching the two views of the app: the
//! calendar view uses multi-select quick filters plus an optional explicit
//! date, the map view a single always-active filter. Both decide event
//! visibility as pure functions of the event, the selection, and an
//! injected "today".

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::event::Event;

/// A named quick filter the user toggles on or off (calendar view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuickFilter {
    Today,
    Tomorrow,
    Friday,
    Saturday,
    Sunday,
}

impl QuickFilter {
    /// Parse a filter token. Unknown tokens yield `None` and therefore
    /// never match anything.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "today" => Some(QuickFilter::Today),
            "tomorrow" => Some(QuickFilter::Tomorrow),
            "friday" => Some(QuickFilter::Friday),
            "saturday" => Some(QuickFilter::Saturday),
            "sunday" => Some(QuickFilter::Sunday),
            _ => None,
        }
    }

    // Weekday filters match any date with that weekday, not only the next
    // occurrence.
    fn matches(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            QuickFilter::Today => day == today,
            QuickFilter::Tomorrow => Some(day) == today.succ_opt(),
            QuickFilter::Friday => day.weekday() == Weekday::Fri,
            QuickFilter::Saturday => day.weekday() == Weekday::Sat,
            QuickFilter::Sunday => day.weekday() == Weekday::Sun,
        }
    }
}

/// Current user intent in the calendar view.
///
/// Quick filters and the explicit date are mutually exclusive: picking a
/// date clears the filters, enabling a filter clears the date. The
/// mutators maintain that invariant, so both can never be active at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    quick_filters: BTreeSet<QuickFilter>,
    explicit_date: Option<NaiveDate>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a quick filter, clearing any explicit date.
    pub fn enable(&mut self, filter: QuickFilter) {
        self.explicit_date = None;
        self.quick_filters.insert(filter);
    }

    pub fn disable(&mut self, filter: QuickFilter) {
        self.quick_filters.remove(&filter);
    }

    /// Pick an explicit date, clearing all quick filters.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.quick_filters.clear();
        self.explicit_date = Some(date);
    }

    /// Reset to the no-filter state (everything dated is shown).
    pub fn clear(&mut self) {
        self.quick_filters.clear();
        self.explicit_date = None;
    }

    pub fn explicit_date(&self) -> Option<NaiveDate> {
        self.explicit_date
    }

    pub fn quick_filters(&self) -> impl Iterator<Item = QuickFilter> + '_ {
        self.quick_filters.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.quick_filters.is_empty() && self.explicit_date.is_none()
    }

    /// Decide whether `event` is visible under this selection.
    ///
    /// Events without a date are always excluded. An explicit date
    /// overrides quick filters entirely; with no active filter every dated
    /// event is included; otherwise the event must satisfy at least one
    /// quick filter.
    pub fn includes(&self, event: &Event, today: NaiveDate) -> bool {
        let Some(date) = event.date else {
            return false;
        };
        let day = date.date_naive();

        if let Some(explicit) = self.explicit_date {
            return day == explicit;
        }

        if self.quick_filters.is_empty() {
            return true;
        }

        self.quick_filters.iter().any(|f| f.matches(day, today))
    }
}

/// Map-view filter: single-select, always active, defaults to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapFilter {
    #[default]
    Today,
    Tomorrow,
    Weekend,
}

impl MapFilter {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "today" => Some(MapFilter::Today),
            "tomorrow" => Some(MapFilter::Tomorrow),
            "weekend" => Some(MapFilter::Weekend),
            _ => None,
        }
    }

    /// Decide whether `event` is visible under this filter. Weekend means
    /// any Friday, Saturday or Sunday.
    pub fn includes(&self, event: &Event, today: NaiveDate) -> bool {
        let Some(date) = event.date else {
            return false;
        };
        let day = date.date_naive();

        match self {
            MapFilter::Today => day == today,
            MapFilter::Tomorrow => Some(day) == today.succ_opt(),
            MapFilter::Weekend => {
                matches!(day.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
            }
        }
    }
}
