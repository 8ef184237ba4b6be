use sd_core::{EventTimes, NewSaveDate};

/// Creates a valid NewSaveDate with a two-entry schedule
pub fn create_test_new_save_date() -> NewSaveDate {
    create_test_save_date_with_times([("Cerimônia", "18:00"), ("Festa", "20:00")])
}

/// Creates a valid NewSaveDate with the given label/time pairs
pub fn create_test_save_date_with_times<'a, I>(times: I) -> NewSaveDate
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    NewSaveDate {
        title: "Meu Evento".to_string(),
        event_subtitle: Some("Subtítulo Teste".to_string()),
        event_summary: "Resumo de teste com mais de dez caracteres".to_string(),
        event_times: times.into_iter().collect::<EventTimes>(),
        event_venue: "Salão Central".to_string(),
        event_address: "Rua Exemplo, 123".to_string(),
        event_city: "São Paulo".to_string(),
    }
}
