pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::articles::handlers as articles;
use crate::auth::handlers as auth;
use crate::fact_check::handlers as fact_check;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fact-check API
        .route(
            "/api/fact-check",
            get(fact_check::handle_get_session).post(fact_check::handle_check_claim),
        )
        .route("/api/fact-check/continue", post(fact_check::handle_continue))
        .route("/api/fact-check/query", post(report::handle_query))
        // Articles API
        .route(
            "/api/articles",
            get(articles::handle_list_articles).post(articles::handle_create_article),
        )
        .route("/api/articles/analyze", post(articles::handle_analyze_article))
        .route("/api/articles/:slug", get(articles::handle_get_article))
        .route("/api/tags", get(articles::handle_trending_tags))
        // Auth API
        .route("/api/auth/signin", post(auth::handle_sign_in))
        .route("/api/auth/verify", get(auth::handle_verify))
        .route("/api/auth/session", get(auth::handle_session))
        .route("/api/auth/signout", post(auth::handle_sign_out))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::auth::mailer::testing::RecordingMailer;
    use crate::auth::store::MemoryAuthStore;
    use crate::config::Config;
    use crate::fact_check::analyzer::ClaimAnalyzer;
    use crate::fact_check::session::SessionManager;
    use crate::fact_check::store::MemoryFactCheckStore;
    use crate::report::service::ReportService;

    /// Router over in-memory stores and a pool that never connects.
    fn test_app(config: Config) -> (Router, Arc<RecordingMailer>) {
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        let sessions = SessionManager::new(
            Arc::new(ClaimAnalyzer::template_only()),
            Arc::new(MemoryFactCheckStore::new()),
        );
        let mailer = Arc::new(RecordingMailer::default());
        let router = build_router(AppState {
            db,
            config,
            sessions: Arc::new(sessions),
            reports: Arc::new(ReportService::new(None)),
            auth: Arc::new(MemoryAuthStore::new()),
            mailer: mailer.clone(),
        });
        (router, mailer)
    }

    fn test_router() -> Router {
        test_app(Config::for_tests()).0
    }

    async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_as(app, method, path, body, None).await
    }

    async fn send_as(
        app: &Router,
        method: &str,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(path);
        if let Some(token) = bearer {
            request = request.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json_body) => request
                .header("content-type", "application/json")
                .body(Body::from(json_body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Path and query of a magic link, ready to send to the router.
    fn link_path(link: &str) -> String {
        link.trim_start_matches("http://localhost:3000").to_string()
    }

    async fn sign_in(app: &Router, mailer: &RecordingMailer, email: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": email })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "verification_sent");
        let link = mailer.last_link_to(&email.trim().to_lowercase()).unwrap();
        link_path(&link)
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "truthlens-api");
        assert_eq!(body["llm"], "demo");
    }

    #[tokio::test]
    async fn test_check_claim_rejects_blank_claim() {
        let app = test_router();
        let (status, body) =
            send(&app, "POST", "/api/fact-check", Some(json!({ "claim": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(&app, "POST", "/api/fact-check", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_check_claim_then_fetch_and_continue_session() {
        let app = test_router();
        let (status, result) = send(
            &app,
            "POST",
            "/api/fact-check",
            Some(json!({ "claim": "  Indian roads are the best in the world  " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["verdict"], "FALSE");
        assert_eq!(result["confidenceScore"], 89);
        assert_eq!(result["claim"], "Indian roads are the best in the world");
        let session_id = result["sessionId"].as_str().unwrap().to_string();

        let (status, next) = send(
            &app,
            "POST",
            "/api/fact-check/continue",
            Some(json!({ "sessionId": session_id, "additionalClaim": "And what about costs?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(next["sessionId"], session_id.as_str());

        let (status, session) = send(
            &app,
            "GET",
            &format!("/api/fact-check?sessionId={session_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let claims = session["claims"].as_array().unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[1]["claim"], "And what about costs?");
    }

    #[tokio::test]
    async fn test_get_session_errors() {
        let app = test_router();
        let (status, _) = send(&app, "GET", "/api/fact-check", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/api/fact-check?sessionId=missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_continue_errors() {
        let app = test_router();
        let (status, _) = send(
            &app,
            "POST",
            "/api/fact-check/continue",
            Some(json!({ "sessionId": "sess-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "POST",
            "/api/fact-check/continue",
            Some(json!({ "sessionId": "unknown", "additionalClaim": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_query_report() {
        let app = test_router();
        let (status, body) = send(
            &app,
            "POST",
            "/api/fact-check/query",
            Some(json!({ "query": "Is the smart city project on track?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["verdict"], "mixed");
        assert_eq!(body["comprehensive"]["snapshot"].as_array().unwrap().len(), 5);
        assert!(body["comprehensive"]["projectTracker"].is_array());

        let (status, _) =
            send(&app, "POST", "/api/fact-check/query", Some(json!({ "query": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_article_requires_auth() {
        let app = test_router();
        let (status, body) = send(
            &app,
            "POST",
            "/api/articles",
            Some(json!({ "title": "t", "slug": "t", "contentMd": "body" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_analyze_article_requires_id() {
        let app = test_router();
        let (status, _) = send(&app, "POST", "/api/articles/analyze", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_anonymous_session_is_null_and_signout_is_401() {
        let app = test_router();
        let (status, body) = send(&app, "GET", "/api/auth/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());

        let (status, _) = send(&app, "POST", "/api/auth/signout", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_signin_rejects_bad_email() {
        let app = test_router();
        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": "not-an-email" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_magic_link_signs_in_once() {
        let (app, mailer) = test_app(Config::for_tests());
        let verify = sign_in(&app, &mailer, " Reader@Example.com ").await;
        assert!(verify.starts_with("/api/auth/verify?"));
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);

        let (status, signed_in) = send(&app, "GET", &verify, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(signed_in["user"]["email"], "reader@example.com");
        let token = signed_in["sessionToken"].as_str().unwrap().to_string();
        assert_eq!(token.len(), 64);

        let (status, _) = send(&app, "GET", &verify, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, session) = send_as(&app, "GET", "/api/auth/session", None, Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["user"]["email"], "reader@example.com");
    }

    #[tokio::test]
    async fn test_unknown_or_expired_link_is_rejected() {
        let (app, _) = test_app(Config::for_tests());
        let (status, body) = send(
            &app,
            "GET",
            "/api/auth/verify?email=reader%40example.com&token=deadbeef",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");

        let mut config = Config::for_tests();
        config.magic_link_ttl_minutes = 0;
        let (app, mailer) = test_app(config);
        let verify = sign_in(&app, &mailer, "late@example.com").await;
        let (status, _) = send(&app, "GET", &verify, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_link_for_one_address_does_not_sign_in_another() {
        let (app, mailer) = test_app(Config::for_tests());
        let verify = sign_in(&app, &mailer, "a@example.com").await;
        let forged = verify.replace("a%40example.com", "b%40example.com");
        assert_ne!(forged, verify);
        let (status, _) = send(&app, "GET", &forged, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sign_out_ends_session_and_claims_record_user() {
        let (app, mailer) = test_app(Config::for_tests());
        let verify = sign_in(&app, &mailer, "writer@example.com").await;
        let (_, signed_in) = send(&app, "GET", &verify, None).await;
        let token = signed_in["sessionToken"].as_str().unwrap().to_string();

        let (status, result) = send_as(
            &app,
            "POST",
            "/api/fact-check",
            Some(json!({ "claim": "GDP growth hit 8 percent" })),
            Some(&token),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let session_id = result["sessionId"].as_str().unwrap();
        let (_, session) = send(
            &app,
            "GET",
            &format!("/api/fact-check?sessionId={session_id}"),
            None,
        )
        .await;
        assert_eq!(session["userId"], "writer@example.com");

        let (status, _) = send_as(&app, "POST", "/api/auth/signout", None, Some(&token)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, session) = send_as(&app, "GET", "/api/auth/session", None, Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(session.is_null());
        let (status, _) = send_as(&app, "POST", "/api/auth/signout", None, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
