use eventdesk::config::{EnvConfig, CONFIG};
use eventdesk::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        CONFIG.get_or_init(|| EnvConfig {
            port: 8080,
            db_url: "unused-in-tests".to_string(),
            admin_key: TEST_ADMIN_KEY.to_string(),
        });

        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use eventdesk::types::registration::{MemberDraft, RRegistrationSubmit, TEAM_SIZE};

    /// Four members with identifiers `<prefix>-1001` .. `<prefix>-1004`,
    /// the first one being the leader by position.
    pub fn sample_members(prefix: &str) -> Vec<MemberDraft> {
        (1..=TEAM_SIZE)
            .map(|i| MemberDraft {
                full_name: format!("Member {} {}", prefix, i),
                identifier: format!("{}-100{}", prefix, i),
                gender: "F".to_string(),
                department: "CSE".to_string(),
                year: "3".to_string(),
                section: "B".to_string(),
                email: format!("{}-{}@test.com", prefix, i),
                mobile: "9876543210".to_string(),
            })
            .collect()
    }

    pub fn sample_registration(team_name: &str, prefix: &str) -> RRegistrationSubmit {
        RRegistrationSubmit {
            team_name: team_name.to_string(),
            members: sample_members(prefix),
        }
    }
}
