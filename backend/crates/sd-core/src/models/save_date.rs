//! Save-the-date announcement entity.

use crate::{
    CoreError, EventTimes, FieldErrors, Result as CoreErrorResult, TextKind, TextLimits, TextRule,
};

use serde::{Deserialize, Serialize};

pub const MIN_TITLE_LENGTH: usize = 3;
pub const MIN_SUMMARY_LENGTH: usize = 10;
pub const MIN_CITY_LENGTH: usize = 2;

pub const TITLE_RULE: TextRule = TextRule::required("title", MIN_TITLE_LENGTH, TextKind::Short);
pub const SUBTITLE_RULE: TextRule = TextRule::optional("event_subtitle", TextKind::Short);
pub const SUMMARY_RULE: TextRule =
    TextRule::required("event_summary", MIN_SUMMARY_LENGTH, TextKind::Summary);
pub const VENUE_RULE: TextRule = TextRule::required("event_venue", 0, TextKind::Short);
pub const ADDRESS_RULE: TextRule = TextRule::required("event_address", 0, TextKind::Short);
pub const CITY_RULE: TextRule = TextRule::required("event_city", MIN_CITY_LENGTH, TextKind::Short);

pub const EVENT_TIMES_FIELD: &str = "event_times";

/// A persisted announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDate {
    pub id: i64,
    pub title: String,
    pub event_subtitle: Option<String>,
    pub event_summary: String,
    pub event_times: EventTimes,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

impl SaveDate {
    /// Attach the identifier assigned by the store
    pub fn from_new(id: i64, new: NewSaveDate) -> Self {
        Self {
            id,
            title: new.title,
            event_subtitle: new.event_subtitle,
            event_summary: new.event_summary,
            event_times: new.event_times,
            event_venue: new.event_venue,
            event_address: new.event_address,
            event_city: new.event_city,
        }
    }
}

/// An announcement that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSaveDate {
    pub title: String,
    pub event_subtitle: Option<String>,
    pub event_summary: String,
    pub event_times: EventTimes,
    pub event_venue: String,
    pub event_address: String,
    pub event_city: String,
}

impl NewSaveDate {
    /// Check every field, collecting all failures.
    ///
    /// This is the model-level check applied before any insert, whichever
    /// path the record came in through.
    #[track_caller]
    pub fn validate(&self, limits: &TextLimits) -> CoreErrorResult<()> {
        let mut errors = FieldErrors::new();

        let fields = [
            (TITLE_RULE, Some(self.title.as_str())),
            (SUBTITLE_RULE, self.event_subtitle.as_deref()),
            (SUMMARY_RULE, Some(self.event_summary.as_str())),
            (VENUE_RULE, Some(self.event_venue.as_str())),
            (ADDRESS_RULE, Some(self.event_address.as_str())),
            (CITY_RULE, Some(self.event_city.as_str())),
        ];

        for (rule, value) in fields {
            if let Some(message) = value.and_then(|v| rule.check(v, limits)) {
                errors.add(rule.field, message);
            }
        }

        for message in self.event_times.problems() {
            errors.add(EVENT_TIMES_FIELD, message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(errors))
        }
    }
}
