use crate::db::postgres_service::PostgresService;
use crate::types::registration::{
    RRegistrationSubmit, RegistrationStatusRes, RegistrationSubmitRes,
};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, post, web};
use std::sync::Arc;

#[get("/status")]
async fn status(db: web::Data<Arc<PostgresService>>) -> ApiResult<RegistrationStatusRes> {
    let settings = db.get_settings().await?;
    let registered = db.count_teams().await?;
    Ok(ApiResponse::Ok(RegistrationStatusRes {
        open: settings.registrations_open,
        limit: settings.registration_limit,
        registered,
    }))
}

#[post("")]
async fn submit(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRegistrationSubmit>,
) -> ApiResult<RegistrationSubmitRes> {
    let data = body.into_inner();
    data.validate()?;

    let team_name = data.team_name.trim().to_string();
    let members = data.sanitized_members();

    let team = db
        .submit_registration(team_name, members)
        .await?
        .into_result()?;
    Ok(ApiResponse::Created(RegistrationSubmitRes {
        id: team.id.to_string(),
        message: format!("Team {} has been successfully registered.", team.name),
    }))
}
