pub mod error;
pub mod models;
pub mod validation;


pub use error::{CoreError, Result};
pub use models::event_time::{EventTime, EventTimes, is_valid_time_of_day};
pub use models::save_date::{
    ADDRESS_RULE, CITY_RULE, EVENT_TIMES_FIELD, MIN_CITY_LENGTH, MIN_SUMMARY_LENGTH,
    MIN_TITLE_LENGTH, NewSaveDate, SUBTITLE_RULE, SUMMARY_RULE, SaveDate, TITLE_RULE, VENUE_RULE,
};
pub use validation::field_errors::FieldErrors;
pub use validation::text_rule::{
    BLANK_MESSAGE, DEFAULT_MAX_SHORT_TEXT_LENGTH, DEFAULT_MAX_SUMMARY_LENGTH, REQUIRED_MESSAGE,
    TextKind, TextLimits, TextRule,
};
