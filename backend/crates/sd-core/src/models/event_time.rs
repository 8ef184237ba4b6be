//! Event schedule: labelled times of day.
//!
//! On the wire a schedule is a list of `{label, time}` pairs; at rest it is a
//! JSON object mapping each label to its time. [`EventTimes::from_entries`]
//! performs that conversion and rejects malformed times.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 24-hour `HH:MM`, 00:00 through 23:59, ASCII digits only
/// (`\d` would also accept digits such as U+0668)
static TIME_OF_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time-of-day regex is valid")
});

/// Check that `value` is a 24-hour `HH:MM` time of day
pub fn is_valid_time_of_day(value: &str) -> bool {
    TIME_OF_DAY_RE.is_match(value)
}

/// One labelled time, e.g. `{"label": "Ceremony", "time": "18:00"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTime {
    pub label: String,
    pub time: String,
}

impl EventTime {
    pub fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time: time.into(),
        }
    }

    /// Validate label and time, returning a message describing the problem
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err(format!(
                "Label must not be blank (time \"{}\").",
                self.time
            ));
        }

        if !is_valid_time_of_day(&self.time) {
            return Err(format!(
                "Invalid time \"{}\" for \"{}\": expected HH:MM (24-hour).",
                self.time, self.label
            ));
        }

        Ok(())
    }
}

/// Label → time mapping as stored, in the order labels were first supplied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTimes(IndexMap<String, String>);

impl EventTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold wire entries into a mapping.
    ///
    /// Every entry is checked; all problems are returned together. A label
    /// given twice keeps its first position and its last time.
    pub fn from_entries<I>(entries: I) -> Result<Self, Vec<String>>
    where
        I: IntoIterator<Item = EventTime>,
    {
        let mut times = IndexMap::new();
        let mut problems = Vec::new();

        for entry in entries {
            match entry.validate() {
                Ok(()) => {
                    times.insert(entry.label, entry.time);
                }
                Err(message) => problems.push(message),
            }
        }

        if problems.is_empty() {
            Ok(Self(times))
        } else {
            Err(problems)
        }
    }

    /// Insert without validation; see [`EventTimes::problems`]
    pub fn insert(&mut self, label: impl Into<String>, time: impl Into<String>) {
        self.0.insert(label.into(), time.into());
    }

    /// Messages for every stored pair that would be rejected on the wire
    pub fn problems(&self) -> Vec<String> {
        self.iter()
            .filter_map(|(label, time)| EventTime::new(label, time).validate().err())
            .collect()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L, T> FromIterator<(L, T)> for EventTimes
where
    L: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(l, t)| (l.into(), t.into())).collect())
    }
}
