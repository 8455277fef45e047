//! Scenario tests for the auth crate
//!
//! Drive the routers in-process against the in-memory store.

mod http_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use platform::password::HashCost;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::admin_policy::AdminAllowList;
    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::handlers::AuthAppState;
    use crate::presentation::router::{auth_router, users_router};

    const ADMIN_EMAIL: &str = "root@x.com";

    fn app() -> Router {
        let config = AuthConfig::new(b"scenario-secret".to_vec())
            .with_admin_emails(AdminAllowList::parse(ADMIN_EMAIL))
            .with_hash_cost(HashCost {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            });
        let state = AuthAppState::new(InMemoryUserRepository::new(), config).unwrap();

        Router::new().nest(
            "/api",
            auth_router(state.clone()).merge(users_router(state)),
        )
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn register(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "email": email,
                "first_name": "Test",
                "last_name": "User",
                "password": password,
            })),
        )
        .await
    }

    async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }

    async fn token_for(app: &Router, email: &str, password: &str) -> String {
        let (status, body) = login(app, email, password).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_login_me_delete_lifecycle() {
        let app = app();

        let (status, user) = register(&app, "a@x.com", "pass1234").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["email"], "a@x.com");
        assert_eq!(user["plan"], "Free");
        assert_eq!(user["addons"], json!([]));
        assert_eq!(user["notification_prefs"], json!({}));
        assert!(user.get("password_hash").is_none());

        let (status, body) = login(&app, "A@X.com", "pass1234").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        let token = body["access_token"].as_str().unwrap().to_string();

        let (status, me) = send(&app, Method::GET, "/api/users/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["id"], user["id"]);

        let (status, _) = send(&app, Method::DELETE, "/api/users/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        // Same unexpired token, but the subject is gone
        let (status, body) = send(&app, Method::GET, "/api/users/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_register_duplicate_and_weak_password() {
        let app = app();
        register(&app, "a@x.com", "pass1234").await;

        let (status, body) = register(&app, "A@x.com", "pass1234").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["detail"], "Email already registered");

        let (status, body) = register(&app, "b@x.com", "abcdefgh").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Password must contain at least one digit");

        let (status, _) = register(&app, "c@x.com", "abcd1234").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_problem_json() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "email": "a@x.com", "last_name": "User", "password": "pass1234" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert!(body["detail"].as_str().unwrap().contains("first_name"));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["title"], "Bad Request");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = app();
        register(&app, "a@x.com", "pass1234").await;

        let wrong_password = login(&app, "a@x.com", "pass9999").await;
        let unknown_email = login(&app, "ghost@x.com", "pass1234").await;

        assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password, unknown_email);
    }

    #[tokio::test]
    async fn test_protected_routes_require_bearer() {
        let app = app();

        let request = Request::builder()
            .uri("/api/users/me")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let (status, _) = send(&app, Method::GET, "/api/users/me", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/api/users/me")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_profile() {
        let app = app();
        register(&app, "a@x.com", "pass1234").await;
        let token = token_for(&app, "a@x.com", "pass1234").await;

        let (status, user) = send(
            &app,
            Method::PUT,
            "/api/users/me",
            Some(&token),
            Some(json!({
                "first_name": "Ada",
                "plan": "Pro",
                "addons": ["extra-seats"],
                "notification_prefs": { "email": true },
                "password": "newpass99",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["first_name"], "Ada");
        assert_eq!(user["last_name"], "User");
        assert_eq!(user["plan"], "Pro");
        assert_eq!(user["addons"], json!(["extra-seats"]));
        assert_eq!(user["notification_prefs"], json!({ "email": true }));

        assert_eq!(login(&app, "a@x.com", "pass1234").await.0, StatusCode::UNAUTHORIZED);
        assert_eq!(login(&app, "a@x.com", "newpass99").await.0, StatusCode::OK);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/users/me",
            Some(&token),
            Some(json!({ "last_name": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_listing() {
        let app = app();
        register(&app, ADMIN_EMAIL, "root1234").await;
        register(&app, "a@x.com", "pass1234").await;
        register(&app, "b@x.com", "pass1234").await;

        let member = token_for(&app, "a@x.com", "pass1234").await;
        let (status, body) = send(&app, Method::GET, "/api/users", Some(&member), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "Admin only");

        let admin = token_for(&app, "Root@X.com", "root1234").await;
        let (status, body) = send(&app, Method::GET, "/api/users", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["items"].as_array().unwrap().len(), 3);

        let (status, body) =
            send(&app, Method::GET, "/api/users?skip=1&limit=1", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["items"].as_array().unwrap().len(), 1);

        let (status, _) =
            send(&app, Method::GET, "/api/users?limit=0", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) =
            send(&app, Method::GET, "/api/users?limit=abc", Some(&member), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "Admin only");

        let (status, body) =
            send(&app, Method::GET, "/api/users?limit=abc", Some(&admin), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }
}
