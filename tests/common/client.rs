use actix_web::{web, App};
use eventdesk::db::postgres_service::PostgresService;
use eventdesk::db::registration::RegistrationOutcome;
use eventdesk::scan::debounce::ScanStations;
use std::sync::Arc;

use super::test_data;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(ScanStations::default()))
            .configure(eventdesk::routes::configure_routes)
    }

    /// Register a committed team straight through the saga.
    #[allow(dead_code)]
    pub async fn register_team(&self, name: &str, prefix: &str) -> entity::team::Model {
        let outcome = self
            .db
            .submit_registration(name.to_string(), test_data::sample_members(prefix))
            .await
            .expect("Failed submitting a registration");
        match outcome {
            RegistrationOutcome::Committed(team) => team,
            other => panic!("Expected a committed registration, got {:?}", other),
        }
    }
}
