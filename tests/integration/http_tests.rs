//! HTTP round trips through the full application

#[cfg(test)]
mod tests {
    use crate::common::{CaseFactory, TEST_PASSWORD, TestDatabase};
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web};
    use casework::Config;
    use casework::server::{AppState, HttpServer};
    use casework::storage::StorageLayer;
    use serde_json::{Value, json};

    fn app_state(db: &TestDatabase, max_attempts: u32) -> AppState {
        let mut config = Config::default();
        config.casework.auth.jwt_secret = "Http-Test-Secret-With-Plenty-Of-Length-99".to_string();
        config.casework.auth.login_limit.max_attempts = max_attempts;
        AppState::new(config, StorageLayer::clone(&db.storage()))
    }

    macro_rules! login {
        ($app:expr, $username:expr) => {{
            let req = actix_test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({"username": $username, "password": TEST_PASSWORD}))
                .to_request();
            let body: Value = actix_test::call_and_read_body_json(&$app, req).await;
            body["data"]["access_token"]
                .as_str()
                .expect("login returns a token")
                .to_string()
        }};
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    macro_rules! tokens {
        ($app:expr, $org:expr) => {
            (
                login!($app, &$org.head.username),
                login!($app, &$org.supervisor.username),
                login!($app, &$org.sdw.username),
                login!($app, &$org.peer_sdw.username),
            )
        };
    }

    #[actix_web::test]
    async fn test_login_and_me() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let app = actix_test::init_service(HttpServer::create_app(web::Data::new(
            app_state(&db, 5),
        )))
        .await;

        let token = login!(app, &org.sdw.username);

        let req = actix_test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&token))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["username"], org.sdw.username);
        assert_eq!(body["data"]["role"], "sdw");
        assert!(body["data"].get("password_hash").is_none());

        let req = actix_test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer("not-a-jwt"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = actix_test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(bearer(&token))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_failed_logins_are_generic_and_rate_limited() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let app = actix_test::init_service(HttpServer::create_app(web::Data::new(
            app_state(&db, 2),
        )))
        .await;

        let attempt = |username: &str, password: &str| {
            actix_test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({"username": username, "password": password}))
                .to_request()
        };

        let wrong_password = actix_test::call_service(&app, attempt(&org.head.username, "nope-123")).await;
        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        let wrong_password: Value = actix_test::read_body_json(wrong_password).await;

        let unknown_user = actix_test::call_service(&app, attempt("ghost", "nope-123")).await;
        assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
        let unknown_user: Value = actix_test::read_body_json(unknown_user).await;
        assert_eq!(wrong_password["message"], unknown_user["message"]);

        // Two failures reached the limit; even correct credentials wait now
        let locked = actix_test::call_service(&app, attempt(&org.head.username, TEST_PASSWORD)).await;
        assert_eq!(locked.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn test_case_lifecycle_over_http() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let app = actix_test::init_service(HttpServer::create_app(web::Data::new(
            app_state(&db, 5),
        )))
        .await;
        let (head, supervisor, sdw, peer) = tokens!(app, org);

        // Head registers a case for the sdw
        let req = actix_test::TestRequest::post()
            .uri("/api/cases")
            .insert_header(bearer(&head))
            .set_json(json!({
                "sm_number": "SM-2024-001",
                "first_name": "Ana",
                "last_name": "Reyes",
                "date_of_birth": "2013-05-20",
                "assigned_caseworker": org.sdw.id,
            }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        let case_id = body["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["version"], 0);

        // The sdw sees it, the peer does not
        let req = actix_test::TestRequest::get()
            .uri("/api/cases")
            .insert_header(bearer(&sdw))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["total"], 1);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/cases/{}", case_id))
            .insert_header(bearer(&peer))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "case is not assigned to you");
        assert_eq!(body["code"], "ACCESS_DENIED");

        // Forms
        let req = actix_test::TestRequest::post()
            .uri(&format!("/api/cases/{}/interventions", case_id))
            .insert_header(bearer(&sdw))
            .set_json(json!({"kind": "home_visit", "details": {"findings": "ok"}}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/cases/{}/interventions?kind=home_visit", case_id))
            .insert_header(bearer(&supervisor))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["intervention_number"], 1);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/cases/{}/interventions?kind=medical", case_id))
            .insert_header(bearer(&supervisor))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = actix_test::TestRequest::post()
            .uri(&format!("/api/cases/{}/progress-reports", case_id))
            .insert_header(bearer(&sdw))
            .set_json(json!({
                "period_start": "2024-01-01",
                "period_end": "2024-06-30",
                "summary": "Good progress in school",
            }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        // Closure: request, duplicate, accept
        let closure_uri = format!("/api/cases/{}/closure", case_id);
        let req = actix_test::TestRequest::post()
            .uri(&closure_uri)
            .insert_header(bearer(&sdw))
            .set_json(json!({"reason": "Graduated"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = actix_test::TestRequest::post()
            .uri(&closure_uri)
            .insert_header(bearer(&sdw))
            .set_json(json!({"reason": "Graduated"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let req = actix_test::TestRequest::get()
            .uri("/api/closures")
            .insert_header(bearer(&supervisor))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["total"], 1);
        let closure_id = body["data"][0]["id"].as_str().unwrap().to_string();

        let req = actix_test::TestRequest::post()
            .uri(&format!("/api/closures/{}/accept", closure_id))
            .insert_header(bearer(&supervisor))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["closure"]["status"], "Accepted");
        assert_eq!(body["data"]["case"]["is_active"], false);

        // Closed case rejects further forms
        let req = actix_test::TestRequest::post()
            .uri(&format!("/api/cases/{}/interventions", case_id))
            .insert_header(bearer(&sdw))
            .set_json(json!({"kind": "counseling"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        // Document data is still readable
        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/cases/{}/document", case_id))
            .insert_header(bearer(&supervisor))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["fields"]["status"], "Closed");
        assert_eq!(body["data"]["progress_reports"].as_array().unwrap().len(), 1);

        // Dashboard
        let req = actix_test::TestRequest::get()
            .uri("/api/dashboard/statistics")
            .insert_header(bearer(&head))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["closed_cases"], 1);
        assert_eq!(body["data"]["interventions_by_kind"]["home_visit"], 1);
    }

    #[actix_web::test]
    async fn test_unknown_case_and_missing_token() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let case = CaseFactory::assigned_to(&org.sdw).insert(db.db()).await;
        let app = actix_test::init_service(HttpServer::create_app(web::Data::new(
            app_state(&db, 5),
        )))
        .await;
        let head = login!(app, &org.head.username);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/cases/{}", uuid::Uuid::new_v4()))
            .insert_header(bearer(&head))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/cases/{}", case.id))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_employee_management_over_http() {
        let db = TestDatabase::new().await;
        let org = db.seed_org().await;
        let app = actix_test::init_service(HttpServer::create_app(web::Data::new(
            app_state(&db, 5),
        )))
        .await;
        let (head, supervisor, _, _) = tokens!(app, org);

        let new_sdw = json!({
            "username": "new_sdw",
            "password": "welcome2024",
            "first_name": "Lito",
            "last_name": "Garcia",
            "role": "sdw",
            "manager": org.supervisor.id,
        });

        let req = actix_test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(bearer(&supervisor))
            .set_json(&new_sdw)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let req = actix_test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(bearer(&head))
            .set_json(&new_sdw)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = actix_test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(bearer(&head))
            .set_json(json!({
                "username": "misplaced",
                "password": "welcome2024",
                "first_name": "Rey",
                "last_name": "Cruz",
                "role": "sdw",
                "manager": org.head.id,
            }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        // The supervisor's team grew by one
        let req = actix_test::TestRequest::get()
            .uri("/api/employees")
            .insert_header(bearer(&supervisor))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["total"], 4);

        let req = actix_test::TestRequest::post()
            .uri("/api/spus")
            .insert_header(bearer(&head))
            .set_json(json!({"name": "Highlands"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = actix_test::TestRequest::get()
            .uri("/api/spus")
            .insert_header(bearer(&supervisor))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["name"], "Highlands");
    }
}
