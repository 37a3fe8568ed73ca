use actix_web::{web, App, HttpServer};
use eventdesk::config::{EnvConfig, CONFIG};
use eventdesk::db::postgres_service::PostgresService;
use eventdesk::routes::configure_routes;
use eventdesk::scan::debounce::ScanStations;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    CONFIG.set(config.clone()).ok();

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );
    let stations = web::Data::new(ScanStations::default());

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(stations.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
