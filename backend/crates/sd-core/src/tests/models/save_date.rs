use crate::{EventTimes, NewSaveDate, SaveDate, TextLimits};

use googletest::prelude::*;

fn valid_new_save_date() -> NewSaveDate {
    NewSaveDate {
        title: "Meu Evento".to_string(),
        event_subtitle: Some("Subtítulo Teste".to_string()),
        event_summary: "Resumo de teste com mais de dez caracteres".to_string(),
        event_times: [("Cerimônia", "18:00"), ("Festa", "20:00")]
            .into_iter()
            .collect(),
        event_venue: "Salão Central".to_string(),
        event_address: "Rua Exemplo, 123".to_string(),
        event_city: "São Paulo".to_string(),
    }
}

#[test]
fn test_valid_save_date_passes() {
    let result = valid_new_save_date().validate(&TextLimits::default());

    assert_that!(result, ok(anything()));
}

#[test]
fn test_title_min_length() {
    let mut save_date = valid_new_save_date();
    save_date.title = "Oi".to_string();

    let error = save_date.validate(&TextLimits::default()).unwrap_err();

    assert!(error.field_errors().contains("title"));
}

#[test]
fn test_title_min_length_counts_characters() {
    // Three characters, six bytes
    let mut save_date = valid_new_save_date();
    save_date.title = "ÉÂÃ".to_string();

    let result = save_date.validate(&TextLimits::default());

    assert_that!(result, ok(anything()));
}

#[test]
fn test_event_summary_min_length() {
    let mut save_date = valid_new_save_date();
    save_date.event_summary = "Curto".to_string();

    let error = save_date.validate(&TextLimits::default()).unwrap_err();

    assert!(error.field_errors().contains("event_summary"));
}

#[test]
fn test_event_city_min_length() {
    let mut save_date = valid_new_save_date();
    save_date.event_city = "A".to_string();

    let error = save_date.validate(&TextLimits::default()).unwrap_err();

    assert!(error.field_errors().contains("event_city"));
}

#[test]
fn test_blank_venue_rejected() {
    let mut save_date = valid_new_save_date();
    save_date.event_venue = "   ".to_string();

    let error = save_date.validate(&TextLimits::default()).unwrap_err();

    assert!(error.field_errors().contains("event_venue"));
}

#[test]
fn test_missing_subtitle_allowed() {
    let mut save_date = valid_new_save_date();
    save_date.event_subtitle = None;

    assert_that!(save_date.validate(&TextLimits::default()), ok(anything()));

    save_date.event_subtitle = Some(String::new());
    assert_that!(save_date.validate(&TextLimits::default()), ok(anything()));
}

#[test]
fn test_max_length_uses_limits() {
    let mut save_date = valid_new_save_date();
    save_date.event_address = "x".repeat(21);

    let limits = TextLimits::new(20, 5000);
    let error = save_date.validate(&limits).unwrap_err();

    let messages = error.field_errors().get("event_address").unwrap();
    assert_that!(messages[0], contains_substring("20"));
}

#[test]
fn test_all_failures_collected() {
    let mut save_date = valid_new_save_date();
    save_date.title = "Oi".to_string();
    save_date.event_summary = "Curto".to_string();
    save_date.event_city = "A".to_string();
    save_date.event_times.insert("Festa", "25:61");

    let error = save_date.validate(&TextLimits::default()).unwrap_err();

    let fields: Vec<&str> = error.field_errors().fields().collect();
    assert_eq!(
        fields,
        vec!["event_city", "event_summary", "event_times", "title"]
    );
}

#[test]
fn test_event_times_is_mapping() {
    let save_date = SaveDate::from_new(7, valid_new_save_date());

    assert_that!(save_date.id, eq(7));
    assert_eq!(save_date.event_times.get("Cerimônia"), Some("18:00"));

    let json = serde_json::to_value(&save_date).unwrap();
    assert!(json["event_times"].is_object());
}

#[test]
fn test_from_new_keeps_fields() {
    let new = valid_new_save_date();

    let save_date = SaveDate::from_new(1, new.clone());

    assert_that!(save_date.title, eq(&new.title));
    assert_that!(save_date.event_subtitle, eq(&new.event_subtitle));
    assert_that!(save_date.event_city, eq(&new.event_city));
    assert_eq!(save_date.event_times, new.event_times);
    assert_ne!(save_date.event_times, EventTimes::new());
}
