//! The shared event type.
//!
//! Events are constructed once per fetch from backend payloads (see
//! `protocol`) and handed around as immutable values; the filtering and
//! grouping engine only ever reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community event as known to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Backend-assigned identifier, stable per event.
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    /// Free-text price ("Free", "10€", ...).
    pub price: Option<String>,
    /// Events without a date never appear in any filtered or grouped view.
    pub date: Option<DateTime<Utc>>,
}
