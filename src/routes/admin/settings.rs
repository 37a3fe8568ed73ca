use crate::db::postgres_service::PostgresService;
use crate::db::settings::EventSettings;
use crate::types::registration::RSettingsUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, put, web};
use std::sync::Arc;

#[get("")]
async fn show(db: web::Data<Arc<PostgresService>>) -> ApiResult<EventSettings> {
    Ok(ApiResponse::Ok(db.get_settings().await?))
}

#[put("")]
async fn update(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSettingsUpdate>,
) -> ApiResult<EventSettings> {
    let data = body.into_inner();
    if let Some(open) = data.registrations_open {
        db.set_registrations_open(open).await?;
    }
    if let Some(limit) = data.registration_limit {
        db.set_registration_limit(limit).await?;
    }
    Ok(ApiResponse::Ok(db.get_settings().await?))
}
