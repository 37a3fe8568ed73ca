use crate::types::response::{ApiResponse, ApiResult};
use actix_web::get;
use serde::Serialize;

#[derive(Serialize)]
pub struct Empty {}

#[get("")]
async fn health() -> ApiResult<Empty> {
    Ok(ApiResponse::EmptyOk)
}
