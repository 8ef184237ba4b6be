pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    save_dates::{
        create_save_date_request::{CreateSaveDateRequest, EventTimeEntry},
        save_date_created_response::SaveDateCreatedResponse,
        save_date_dto::SaveDateDto,
        save_dates::{create_save_date, get_save_date, list_save_dates},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
