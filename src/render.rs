//! Terminal rendering for events and day sections.
//!
//! Extension trait adding colored output to agenda-core types, in the
//! spirit of the backend app's list and map views.

use agenda_core::Event;
use agenda_core::group::Section;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = match self.date {
            Some(dt) => format!("{:>7}", dt.format("%H:%M")),
            None => format!("{:>7}", "--:--"),
        };

        let mut line = format!("  {} {}", time.dimmed(), self.name);
        if let Some(price) = &self.price {
            line.push_str(&format!(" {}", format!("({price})").dimmed()));
        }

        line
    }
}

impl Render for Section {
    fn render(&self) -> String {
        let mut lines = vec![self.label.bold().to_string()];
        for event in &self.events {
            lines.push(event.render());
        }

        lines.join("\n")
    }
}

/// One map pin: coordinates plus the event summary.
pub fn render_pin(event: &Event) -> String {
    let coords = format!("({:.4}, {:.4})", event.latitude, event.longitude);
    let mut line = format!("  📍 {} {}", event.name, coords.dimmed());
    if let Some(price) = &event.price {
        line.push_str(&format!(" {}", format!("({price})").dimmed()));
    }

    line
}
