use crate::{BLANK_MESSAGE, TextKind, TextLimits, TextRule};

use googletest::prelude::*;

const TITLE: TextRule = TextRule::required("title", 3, TextKind::Short);
const SUBTITLE: TextRule = TextRule::optional("event_subtitle", TextKind::Short);
const SUMMARY: TextRule = TextRule::required("event_summary", 10, TextKind::Summary);

#[test]
fn test_value_within_bounds_passes() {
    let result = TITLE.check("Meu Evento", &TextLimits::default());

    assert_that!(result, none());
}

#[test]
fn test_value_below_minimum_fails() {
    let message = TITLE.check("Oi", &TextLimits::default()).unwrap();

    assert_that!(message, contains_substring("at least 3"));
}

#[test]
fn test_blank_required_value_fails() {
    let message = TITLE.check("   ", &TextLimits::default()).unwrap();

    assert_that!(message, eq(BLANK_MESSAGE));
}

#[test]
fn test_blank_optional_value_passes() {
    let result = SUBTITLE.check("", &TextLimits::default());

    assert_that!(result, none());
}

#[test]
fn test_short_kind_uses_short_limit() {
    let limits = TextLimits::new(5, 100);

    let at_limit = TITLE.check("12345", &limits);
    assert_that!(at_limit, none());
    let message = TITLE.check("123456", &limits).unwrap();
    assert_that!(message, contains_substring("no more than 5"));
}

#[test]
fn test_summary_kind_uses_summary_limit() {
    let limits = TextLimits::new(5, 12);

    let at_limit = SUMMARY.check("0123456789ab", &limits);
    let over_limit = SUMMARY.check("0123456789abc", &limits);

    assert_that!(at_limit, none());
    assert_that!(over_limit, some(anything()));
}

#[test]
fn test_default_limits() {
    let limits = TextLimits::default();

    assert_that!(limits.max_for(TextKind::Short), eq(255));
    assert_that!(limits.max_for(TextKind::Summary), eq(5000));
}
