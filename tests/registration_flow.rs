use actix_web::{http::StatusCode, test};

mod common;
use common::{client::TestClient, test_data, TestContext};
use eventdesk::db::registration::RegistrationOutcome;
use eventdesk::types::error::AppError;
use eventdesk::types::registration::TEAM_SIZE;

#[tokio::test]
async fn test_registration_flow_unlimited_success() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let payload = test_data::sample_registration("Alpha", "alpha");

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let team_id = uuid::Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();

    // Every member landed and is findable by identifier
    assert_eq!(ctx.db.count_teams().await.unwrap(), 1);
    assert_eq!(ctx.db.count_members().await.unwrap(), TEAM_SIZE as u64);
    for member in &payload.members {
        let found = ctx
            .db
            .lookup_member(&member.identifier)
            .await
            .unwrap()
            .expect("registered member not found by identifier");
        assert_eq!(found.team_id, team_id);
    }

    // Exactly one leader, and it is the first submitted member
    let teams = ctx.db.list_teams_with_members().await.unwrap();
    let (_, members) = &teams[0];
    let leaders: Vec<_> = members.iter().filter(|m| m.is_leader).collect();
    assert_eq!(leaders.len(), 1);
    assert_eq!(leaders[0].identifier, payload.members[0].identifier);
}

#[tokio::test]
async fn test_registration_flow_capacity_exceeded() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.register_team("First", "first").await;
    client.register_team("Second", "second").await;
    ctx.db.set_registration_limit(2).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&test_data::sample_registration("Third", "third"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CAPACITY_EXCEEDED");

    // zero new rows of either kind
    assert_eq!(ctx.db.count_teams().await.unwrap(), 2);
    assert_eq!(ctx.db.count_members().await.unwrap(), 2 * TEAM_SIZE as u64);
}

#[tokio::test]
async fn test_registration_flow_closed() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    ctx.db.set_registrations_open(false).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&test_data::sample_registration("Late", "late"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REGISTRATIONS_CLOSED");
    assert_eq!(ctx.db.count_teams().await.unwrap(), 0);
}

#[tokio::test]
async fn test_registration_flow_duplicate_identifier_rolls_back() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let existing = client.register_team("Alpha", "alpha").await;
    let teams_before = ctx.db.count_teams().await.unwrap();
    let members_before = ctx.db.count_members().await.unwrap();

    // 3rd member collides with an already-registered identifier
    let mut members = test_data::sample_members("bravo");
    members[2].identifier = "alpha-1001".to_string();

    let outcome = ctx
        .db
        .submit_registration("Bravo".to_string(), members)
        .await
        .unwrap();
    match outcome {
        RegistrationOutcome::RolledBack(AppError::DuplicateIdentifier(id)) => {
            assert_eq!(id, "alpha-1001");
        }
        other => panic!("Expected DuplicateIdentifier rollback, got {:?}", other),
    }

    // no orphan team, no stray members
    assert_eq!(ctx.db.count_teams().await.unwrap(), teams_before);
    assert_eq!(ctx.db.count_members().await.unwrap(), members_before);
    let teams = ctx.db.list_teams_with_members().await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].0.id, existing.id);
}

#[tokio::test]
async fn test_registration_flow_duplicate_email_rolls_back() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    client.register_team("Alpha", "alpha").await;

    let mut members = test_data::sample_members("charlie");
    members[1].email = "alpha-1@test.com".to_string();

    let outcome = ctx
        .db
        .submit_registration("Charlie".to_string(), members)
        .await
        .unwrap();
    match outcome {
        RegistrationOutcome::RolledBack(AppError::DuplicateEmail(email)) => {
            assert_eq!(email, "alpha-1@test.com");
        }
        other => panic!("Expected DuplicateEmail rollback, got {:?}", other),
    }
    assert_eq!(ctx.db.count_teams().await.unwrap(), 1);
}

#[tokio::test]
async fn test_registration_flow_wrong_member_count_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let mut payload = test_data::sample_registration("Short", "short");
    payload.members.pop();

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(ctx.db.count_teams().await.unwrap(), 0);
}

#[tokio::test]
async fn test_registration_status_reflects_settings_and_count() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.register_team("Alpha", "alpha").await;
    ctx.db.set_registration_limit(5).await.unwrap();

    let req = test::TestRequest::get().uri("/register/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["open"], true);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["registered"], 1);
}

#[tokio::test]
async fn test_admin_reset_wipes_teams_and_members() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.register_team("Alpha", "alpha").await;
    client.register_team("Bravo", "bravo").await;

    let req = test::TestRequest::delete()
        .uri("/admin/registrations")
        .insert_header(("Authorization", format!("Bearer {}", common::TEST_ADMIN_KEY)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(ctx.db.count_teams().await.unwrap(), 0);
    // cascade took the members too
    assert_eq!(ctx.db.count_members().await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_routes_require_bearer_key() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::delete()
        .uri("/admin/registrations")
        .insert_header(("Authorization", "Bearer wrong-key"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/admin/settings").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[std::prelude::v1::test]
fn test_committed_outcome_yields_the_team() {
    let team = entity::team::Model {
        id: uuid::Uuid::new_v4(),
        name: "Alpha".to_string(),
        created_at: chrono::Utc::now(),
    };
    let committed = RegistrationOutcome::Committed(team.clone())
        .into_result()
        .unwrap();
    assert_eq!(committed.id, team.id);
}

#[std::prelude::v1::test]
fn test_rolled_back_outcome_surfaces_the_member_error() {
    let err = RegistrationOutcome::RolledBack(AppError::DuplicateEmail(
        "alpha-1@test.com".to_string(),
    ))
    .into_result()
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateEmail(email) if email == "alpha-1@test.com"));
}

#[std::prelude::v1::test]
fn test_inconsistent_outcome_surfaces_the_cause_not_the_compensation() {
    // A failed compensating delete leaves an orphan team behind; the caller
    // must still see the member-insert error, not the delete's.
    let err = RegistrationOutcome::Inconsistent {
        team_id: uuid::Uuid::new_v4(),
        cause: AppError::DuplicateIdentifier("alpha-1001".to_string()),
        compensation: sea_orm::DbErr::Custom("connection reset".to_string()),
    }
    .into_result()
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateIdentifier(id) if id == "alpha-1001"));
}
