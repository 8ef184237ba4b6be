pub mod error;
pub mod extractors;
pub mod response_status;
pub mod save_dates;
