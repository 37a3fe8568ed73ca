use crate::utils::webutils::validate_admin_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod health;
pub mod register;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/register")
            .service(register::status)
            .service(register::submit),
    );
    cfg.service(
        web::scope("/admin")
            .wrap(admin_auth)
            .service(
                web::scope("/registrations")
                    .service(admin::registrations::list)
                    .service(admin::registrations::reset),
            )
            .service(
                web::scope("/settings")
                    .service(admin::settings::show)
                    .service(admin::settings::update),
            )
            .service(
                web::scope("/attendance")
                    .service(admin::attendance::scan)
                    .service(admin::attendance::lookup)
                    .service(admin::attendance::list)
                    .service(admin::attendance::mark_absent)
                    .service(admin::attendance::clear),
            ),
    );
}
