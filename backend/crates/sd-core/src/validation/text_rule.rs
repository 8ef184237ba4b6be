//! Length rules for the text fields of a save-the-date record.

/// Default upper bound for short text fields (title, venue, city, ...)
pub const DEFAULT_MAX_SHORT_TEXT_LENGTH: usize = 255;

/// Default upper bound for the summary
pub const DEFAULT_MAX_SUMMARY_LENGTH: usize = 5000;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Which configurable upper bound applies to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Short,
    Summary,
}

/// Configurable upper bounds, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimits {
    pub max_short_text_length: usize,
    pub max_summary_length: usize,
}

impl TextLimits {
    pub fn new(max_short_text_length: usize, max_summary_length: usize) -> Self {
        Self {
            max_short_text_length,
            max_summary_length,
        }
    }

    pub fn max_for(&self, kind: TextKind) -> usize {
        match kind {
            TextKind::Short => self.max_short_text_length,
            TextKind::Summary => self.max_summary_length,
        }
    }
}

impl Default for TextLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SHORT_TEXT_LENGTH, DEFAULT_MAX_SUMMARY_LENGTH)
    }
}

/// Constraint on one text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    pub field: &'static str,
    /// Minimum length in characters (0 = no minimum)
    pub min_chars: usize,
    pub kind: TextKind,
    /// Required fields must be present and not blank
    pub required: bool,
}

impl TextRule {
    pub const fn required(field: &'static str, min_chars: usize, kind: TextKind) -> Self {
        Self {
            field,
            min_chars,
            kind,
            required: true,
        }
    }

    pub const fn optional(field: &'static str, kind: TextKind) -> Self {
        Self {
            field,
            min_chars: 0,
            kind,
            required: false,
        }
    }

    /// Check `value`, returning the message to report if it breaks the rule.
    ///
    /// Lengths are counted in characters, so accented names are not
    /// penalised for their UTF-8 width.
    pub fn check(&self, value: &str, limits: &TextLimits) -> Option<String> {
        if value.trim().is_empty() {
            return if self.required {
                Some(BLANK_MESSAGE.to_string())
            } else {
                None
            };
        }

        let length = value.chars().count();
        if length < self.min_chars {
            return Some(format!(
                "Ensure this field has at least {} characters.",
                self.min_chars
            ));
        }

        let max = limits.max_for(self.kind);
        if length > max {
            return Some(format!(
                "Ensure this field has no more than {} characters.",
                max
            ));
        }

        None
    }
}
