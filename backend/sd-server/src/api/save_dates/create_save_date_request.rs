//! Write adapter: request body → `NewSaveDate`
//!
//! Every member is optional at the serde layer so that a body missing several
//! fields reports all of them, not only the first one serde trips over.

use sd_core::{
    ADDRESS_RULE, CITY_RULE, EVENT_TIMES_FIELD, EventTime, EventTimes, FieldErrors, NewSaveDate,
    REQUIRED_MESSAGE, SUBTITLE_RULE, SUMMARY_RULE, TITLE_RULE, TextLimits, TextRule, VENUE_RULE,
};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSaveDateRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub event_subtitle: Option<String>,

    #[serde(default)]
    pub event_summary: Option<String>,

    /// Ordered `{label, time}` pairs
    #[serde(default)]
    pub event_times: Option<Vec<EventTimeEntry>>,

    #[serde(default)]
    pub event_venue: Option<String>,

    #[serde(default)]
    pub event_address: Option<String>,

    #[serde(default)]
    pub event_city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventTimeEntry {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub time: Option<String>,
}

impl EventTimeEntry {
    pub fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            time: Some(time.into()),
        }
    }
}

impl CreateSaveDateRequest {
    /// Validate the body and convert it into a record ready to persist.
    ///
    /// All failures are collected before the request is rejected.
    pub fn into_new_save_date(self, limits: &TextLimits) -> Result<NewSaveDate, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, &TITLE_RULE, self.title, limits);
        let event_subtitle = optional_text(&mut errors, &SUBTITLE_RULE, self.event_subtitle, limits);
        let event_summary = required_text(&mut errors, &SUMMARY_RULE, self.event_summary, limits);
        let event_times = fold_event_times(&mut errors, self.event_times);
        let event_venue = required_text(&mut errors, &VENUE_RULE, self.event_venue, limits);
        let event_address = required_text(&mut errors, &ADDRESS_RULE, self.event_address, limits);
        let event_city = required_text(&mut errors, &CITY_RULE, self.event_city, limits);

        match (
            title,
            event_summary,
            event_times,
            event_venue,
            event_address,
            event_city,
        ) {
            (
                Some(title),
                Some(event_summary),
                Some(event_times),
                Some(event_venue),
                Some(event_address),
                Some(event_city),
            ) if errors.is_empty() => Ok(NewSaveDate {
                title,
                event_subtitle,
                event_summary,
                event_times,
                event_venue,
                event_address,
                event_city,
            }),
            _ => Err(errors),
        }
    }
}

fn required_text(
    errors: &mut FieldErrors,
    rule: &TextRule,
    value: Option<String>,
    limits: &TextLimits,
) -> Option<String> {
    let Some(value) = value else {
        errors.add(rule.field, REQUIRED_MESSAGE);
        return None;
    };

    let value = value.trim();
    match rule.check(value, limits) {
        Some(message) => {
            errors.add(rule.field, message);
            None
        }
        None => Some(value.to_string()),
    }
}

/// Null and blank both come back as `None`
fn optional_text(
    errors: &mut FieldErrors,
    rule: &TextRule,
    value: Option<String>,
    limits: &TextLimits,
) -> Option<String> {
    let value = value?;
    let value = value.trim();

    if let Some(message) = rule.check(value, limits) {
        errors.add(rule.field, message);
        return None;
    }

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn fold_event_times(
    errors: &mut FieldErrors,
    entries: Option<Vec<EventTimeEntry>>,
) -> Option<EventTimes> {
    let Some(entries) = entries else {
        errors.add(EVENT_TIMES_FIELD, REQUIRED_MESSAGE);
        return None;
    };

    let entries = entries.into_iter().map(|entry| {
        EventTime::new(
            entry.label.as_deref().unwrap_or_default().trim(),
            entry.time.as_deref().unwrap_or_default().trim(),
        )
    });

    match EventTimes::from_entries(entries) {
        Ok(times) => Some(times),
        Err(problems) => {
            for problem in problems {
                errors.add(EVENT_TIMES_FIELD, problem);
            }
            None
        }
    }
}
