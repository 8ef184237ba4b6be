pub mod event_time;
pub mod save_date;
