use crate::SaveDateDto;
use crate::api::response_status::ResponseStatus;

use serde::Serialize;

/// Success envelope returned by create
#[derive(Debug, Serialize)]
pub struct SaveDateCreatedResponse {
    pub status: ResponseStatus,
    pub data: SaveDateDto,
}

impl SaveDateCreatedResponse {
    pub fn success(data: SaveDateDto) -> Self {
        Self {
            status: ResponseStatus::Success,
            data,
        }
    }
}
