use sd_core::{EventTimes, SaveDate};

use serde::Serialize;

/// Save-date DTO for JSON serialization
///
/// `event_times` keeps its stored label → time mapping form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveDateDto {
    pub id: i64,
    pub title: String,
    pub event_subtitle: Option<String>,
    pub event_summary: String,
    pub event_times: EventTimes,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

impl From<SaveDate> for SaveDateDto {
    fn from(s: SaveDate) -> Self {
        Self {
            id: s.id,
            title: s.title,
            event_subtitle: s.event_subtitle,
            event_summary: s.event_summary,
            event_times: s.event_times,
            event_venue: s.event_venue,
            event_address: s.event_address,
            event_city: s.event_city,
        }
    }
}
