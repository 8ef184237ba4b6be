pub mod create_save_date_request;
pub mod save_date_created_response;
pub mod save_date_dto;
pub mod save_dates;
