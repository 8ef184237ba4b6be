pub mod save_date_repository;
