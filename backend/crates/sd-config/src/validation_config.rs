use crate::{ConfigError, ConfigErrorResult};

use sd_core::{
    DEFAULT_MAX_SHORT_TEXT_LENGTH, DEFAULT_MAX_SUMMARY_LENGTH, MIN_SUMMARY_LENGTH as MIN_SUMMARY,
    MIN_TITLE_LENGTH,
};

use serde::Deserialize;

// Validation constraints
pub const MIN_SHORT_TEXT_LENGTH: usize = MIN_TITLE_LENGTH;
pub const MAX_SHORT_TEXT_LENGTH: usize = 1000;

pub const MIN_SUMMARY_LENGTH: usize = MIN_SUMMARY;
pub const MAX_SUMMARY_LENGTH: usize = 100000;

/// Upper bounds on announcement text fields.
///
/// The lower bounds of the configurable ranges are the fixed minimum lengths
/// of the record (title 3, summary 10), so a valid config never makes every
/// record impossible.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum characters for title, subtitle, venue, address and city
    pub max_short_text_length: usize,
    /// Maximum characters for the summary
    pub max_summary_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_short_text_length: DEFAULT_MAX_SHORT_TEXT_LENGTH,
            max_summary_length: DEFAULT_MAX_SUMMARY_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_short_text_length < MIN_SHORT_TEXT_LENGTH
            || self.max_short_text_length > MAX_SHORT_TEXT_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_short_text_length must be {}-{}, got {}",
                MIN_SHORT_TEXT_LENGTH, MAX_SHORT_TEXT_LENGTH, self.max_short_text_length
            )));
        }

        if self.max_summary_length < MIN_SUMMARY_LENGTH
            || self.max_summary_length > MAX_SUMMARY_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_summary_length must be {}-{}, got {}",
                MIN_SUMMARY_LENGTH, MAX_SUMMARY_LENGTH, self.max_summary_length
            )));
        }

        Ok(())
    }
}
