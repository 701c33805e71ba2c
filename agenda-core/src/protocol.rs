//! Wire types for the agenda backend API.
//!
//! Shapes match the backend JSON exactly; converting into [`Event`] is
//! where malformed payloads get dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// One event as returned by `GET /events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<LocationPayload>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    /// ISO-8601 instant with fractional seconds.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationPayload {
    pub lat: f64,
    pub lng: f64,
}

impl EventPayload {
    /// Convert into the shared [`Event`] type.
    ///
    /// Payloads without coordinates are malformed and dropped. A date that
    /// fails to parse degrades to `None`: the event survives parsing but
    /// never appears in a filtered view.
    pub fn into_event(self) -> Option<Event> {
        let location = self.location?;
        let date = self.date.as_deref().and_then(parse_instant);

        Some(Event {
            id: self.id,
            name: self.name,
            latitude: location.lat,
            longitude: location.lng,
            image_url: self.image_url,
            price: self.price,
            date,
        })
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response of `GET /users/me`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub preferred_city: Option<String>,
}

/// Body for `POST /events` (admin only, backend replies 201).
///
/// The backend accepts every field as a string; absent values go over the
/// wire as empty strings, `image` as base64-encoded bytes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    pub name: String,
    pub description: String,
    pub instagram: String,
    pub website: String,
    pub ticket_link: String,
    pub address: String,
    pub city: String,
    pub price: String,
    /// ISO-8601 instant.
    pub date: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_without_coordinates_are_dropped() {
        let json = r#"[
            {"_id": "a1", "name": "Pride Picnic",
             "location": {"lat": 48.85, "lng": 2.35},
             "imageUrl": "https://img.example/picnic.jpg",
             "price": "Free",
             "date": "2024-06-07T18:00:00.000Z"},
            {"_id": "a2", "name": "No location"},
            {"_id": "a3", "name": "Bad date",
             "location": {"lat": 51.5, "lng": -0.12},
             "date": "next friday"}
        ]"#;

        let payloads: Vec<EventPayload> = serde_json::from_str(json).unwrap();
        let events: Vec<Event> = payloads
            .into_iter()
            .filter_map(EventPayload::into_event)
            .collect();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "a1");
        assert_eq!(events[0].image_url.as_deref(), Some("https://img.example/picnic.jpg"));
        assert!(events[0].date.is_some());

        // Unparseable date keeps the event but without a date.
        assert_eq!(events[1].id, "a3");
        assert!(events[1].date.is_none());
    }

    #[test]
    fn test_fractional_second_instants_parse() {
        let payload = EventPayload {
            id: "a1".into(),
            name: "Picnic".into(),
            location: Some(LocationPayload { lat: 1.0, lng: 2.0 }),
            image_url: None,
            price: None,
            date: Some("2024-06-07T18:30:00.123Z".into()),
        };

        let event = payload.into_event().unwrap();
        let date = event.date.unwrap();
        assert_eq!(date.date_naive(), "2024-06-07".parse().unwrap());
    }

    #[test]
    fn test_user_response_defaults() {
        let user: UserResponse = serde_json::from_str("{}").unwrap();
        assert!(!user.is_admin);
        assert_eq!(user.preferred_city, None);

        let admin: UserResponse =
            serde_json::from_str(r#"{"isAdmin": true, "preferredCity": "Paris"}"#).unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.preferred_city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_create_event_payload_uses_camel_case_keys() {
        let payload = CreateEventPayload {
            name: "Picnic".into(),
            description: String::new(),
            instagram: String::new(),
            website: String::new(),
            ticket_link: "https://tickets.example".into(),
            address: String::new(),
            city: "Paris".into(),
            price: String::new(),
            date: "2024-06-07T00:00:00Z".into(),
            image: String::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("ticketLink").is_some());
        assert!(json.get("ticket_link").is_none());
        assert_eq!(json["city"], "Paris");
    }
}
