use crate::db::postgres_service::PostgresService;
use crate::types::registration::{ResetRes, TeamWithMembers};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{delete, get, web};
use std::sync::Arc;

#[get("")]
async fn list(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<TeamWithMembers>> {
    let mut teams: Vec<TeamWithMembers> = db
        .list_teams_with_members()
        .await?
        .into_iter()
        .map(|(team, members)| TeamWithMembers { team, members })
        .collect();
    // newest first, like the staff dashboard table
    teams.sort_by(|a, b| b.team.created_at.cmp(&a.team.created_at));
    Ok(ApiResponse::Ok(teams))
}

#[delete("")]
async fn reset(db: web::Data<Arc<PostgresService>>) -> ApiResult<ResetRes> {
    let deleted = db.delete_all_registrations().await?;
    log::warn!("all registrations wiped ({} teams)", deleted);
    Ok(ApiResponse::Ok(ResetRes { deleted }))
}
