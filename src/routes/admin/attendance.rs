use crate::db::postgres_service::PostgresService;
use crate::scan::debounce::ScanStations;
use crate::scan::sanitize::sanitize_identifier;
use crate::types::attendance::{AttendanceListRes, RScan, RemovedRes, ScanRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, get, post, web};
use std::sync::Arc;

/// Scan or manual entry: sanitize, debounce, then race to the check-in
/// insert. A rapid-fire repeat from the same station is dropped with 204:
/// nothing was processed and nothing went wrong.
#[post("/scan")]
async fn scan(
    db: web::Data<Arc<PostgresService>>,
    stations: web::Data<ScanStations>,
    body: web::Json<RScan>,
) -> ApiResult<ScanRes> {
    let data = body.into_inner();
    let identifier = sanitize_identifier(&data.identifier);
    if identifier.is_empty() {
        return Err(AppError::InvalidInput);
    }

    let station = data.station.unwrap_or_else(|| "manual".to_string());
    if !stations.accept(&station, &identifier) {
        return Ok(ApiResponse::NoContent);
    }

    let (record, member) = db.check_in(&identifier).await?;
    log::info!("{} checked in ({})", member.full_name, record.identifier);
    Ok(ApiResponse::Ok(ScanRes { record, member }))
}

#[get("/lookup/{identifier}")]
async fn lookup(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<entity::member::Model> {
    let member = db
        .lookup_member(&path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::Ok(member))
}

#[get("")]
async fn list(db: web::Data<Arc<PostgresService>>) -> ApiResult<AttendanceListRes> {
    let records = db.list_attendance().await?;
    let present = records.len() as u64;
    let registered = db.count_members().await?;
    Ok(ApiResponse::Ok(AttendanceListRes {
        present,
        registered,
        records,
    }))
}

/// Idempotent mark-absent: deleting an identifier with no record succeeds
/// with `removed: 0`.
#[delete("/{identifier}")]
async fn mark_absent(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<RemovedRes> {
    let removed = db.remove_check_in(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(RemovedRes { removed }))
}

#[delete("")]
async fn clear(db: web::Data<Arc<PostgresService>>) -> ApiResult<RemovedRes> {
    let removed = db.clear_attendance().await?;
    log::warn!("attendance cleared ({} records)", removed);
    Ok(ApiResponse::Ok(RemovedRes { removed }))
}
