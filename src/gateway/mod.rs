pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the complete router.
///
/// Airtime routes are served at `/airtime` and, for the browser form, at
/// `/api/airtime`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let airtime_routes = Router::new().route(
        "/airtime",
        get(handlers::get_networks).post(handlers::purchase_airtime),
    );

    Router::new()
        .merge(airtime_routes.clone())
        .nest("/api", airtime_routes)
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
    })?;

    info!("Gateway listening on http://{}", addr);
    info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::provider::ProviderClient;
    use crate::transaction::repository::mock::MockTransactionStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router(server: &MockServer, store: Arc<MockTransactionStore>) -> Router {
        let provider = ProviderClient::new(&ProviderConfig {
            base_url: server.uri(),
            api_key: "k".to_string(),
            secret_key: "s".to_string(),
            timeout_secs: None,
        })
        .unwrap();
        build_router(Arc::new(AppState::new(Arc::new(provider), store)))
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn success_body() -> Value {
        json!({
            "status": true,
            "airtimeHistory": {
                "transactionId": "TXN-ROUTE-1",
                "email": "merchant@example.com",
                "activity": "Airtime purchase",
                "status": "successful",
                "recipient": "08031234567",
                "amount": "200",
                "amountUsed": "196",
                "initialBalance": "1000",
                "finalBalance": "804",
                "Method": "API"
            }
        })
    }

    const VALID: &str = r#"{"phone":"08031234567","firstLevel":"mtn","amount":"200"}"#;

    #[tokio::test]
    async fn get_airtime_returns_catalog_verbatim() {
        let server = MockServer::start().await;
        let raw = r#"{"mtn":{"id":1},"airtel":{"id":2}}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(raw))
            .mount(&server)
            .await;
        let app = router(&server, Arc::new(MockTransactionStore::new()));

        let response = app.oneshot(get_req("/airtime")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, raw.as_bytes());
    }

    #[tokio::test]
    async fn get_airtime_mirrors_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Forbidden key"})))
            .mount(&server)
            .await;
        let app = router(&server, Arc::new(MockTransactionStore::new()));

        let response = app.oneshot(get_req("/api/airtime")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await, json!({"error": "Forbidden key"}));
    }

    #[tokio::test]
    async fn post_airtime_success_persists_and_passes_body_through() {
        let server = MockServer::start().await;
        let raw = serde_json::to_string(&success_body()).unwrap();
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(raw.clone()))
            .expect(1)
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());
        let app = router(&server, store.clone());

        let response = app.oneshot(post("/airtime", VALID)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, raw.as_bytes());
        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transaction_id, "TXN-ROUTE-1");
    }

    #[tokio::test]
    async fn post_airtime_validation_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());

        let cases = [
            (r#"{"firstLevel":"mtn","amount":"200"}"#, "Missing required fields"),
            (r#"{"phone":"08031234567","amount":"200"}"#, "Missing required fields"),
            (r#"{"phone":"08031234567","firstLevel":"mtn"}"#, "Missing required fields"),
            (
                r#"{"phone":"08031234567","firstLevel":"mtn","amount":-1}"#,
                "Amount must be a positive number",
            ),
            (
                r#"{"phone":"08031234567","firstLevel":"mtn","amount":"ten"}"#,
                "Amount must be a positive number",
            ),
            (
                r#"{"phone":"0803","firstLevel":"mtn","amount":"200"}"#,
                "Phone number must be 11 digits",
            ),
        ];

        for (body, message) in cases {
            let response = router(&server, store.clone())
                .oneshot(post("/airtime", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(body_json(response).await, json!({"error": message}));
        }
        assert_eq!(store.create_calls(), 0);
    }

    #[tokio::test]
    async fn post_airtime_logical_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Invalid network"})))
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());

        let response = router(&server, store.clone())
            .oneshot(post("/airtime", VALID))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid network"}));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn post_airtime_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "Bad phone"})))
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());

        let response = router(&server, store.clone())
            .oneshot(post("/airtime", VALID))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await, json!({"error": "Bad phone"}));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn post_airtime_store_failure_is_generic_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());
        store.set_fail_create(true);

        let response = router(&server, store.clone())
            .oneshot(post("/airtime", VALID))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn post_airtime_wrong_typed_fields_are_validation_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());

        let cases = [
            (
                r#"{"phone":8031234567,"firstLevel":"mtn","amount":"100"}"#,
                "Phone number must be 11 digits",
            ),
            (
                r#"{"phone":"08031234567","firstLevel":"mtn","amount":true}"#,
                "Amount must be a positive number",
            ),
            (
                r#"{"phone":"08031234567","firstLevel":{"id":1},"amount":"100"}"#,
                "Missing required fields",
            ),
            (r#"["08031234567","mtn","100"]"#, "Missing required fields"),
            ("null", "Missing required fields"),
        ];

        for (body, message) in cases {
            let response = router(&server, store.clone())
                .oneshot(post("/airtime", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(body_json(response).await, json!({"error": message}));
        }
        assert_eq!(store.create_calls(), 0);
    }

    #[tokio::test]
    async fn post_airtime_numeric_network_is_forwarded_as_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(wiremock::matchers::body_json(
                json!({"phone": "08031234567", "firstLevel": "5", "amount": 100}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
            .expect(1)
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());

        let response = router(&server, store.clone())
            .oneshot(post(
                "/airtime",
                r#"{"phone":"08031234567","firstLevel":5,"amount":"100"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn post_airtime_unreadable_body_is_generic_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let store = Arc::new(MockTransactionStore::new());

        for body in ["not json", "", r#"{"phone":"08031234567","#] {
            let response = router(&server, store.clone())
                .oneshot(post("/airtime", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert_eq!(body_json(response).await, json!({"error": "Internal server error"}));
        }
    }

    #[tokio::test]
    async fn get_airtime_non_json_failure_uses_fallback_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;
        let app = router(&server, Arc::new(MockTransactionStore::new()));

        let response = app.oneshot(get_req("/airtime")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await, json!({"error": "Failed to fetch networks"}));
    }

    #[tokio::test]
    async fn health_reports_store_state() {
        let server = MockServer::start().await;
        let store = Arc::new(MockTransactionStore::new());

        let response = router(&server, store.clone())
            .oneshot(get_req("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");

        store.set_unhealthy(true);
        let response = router(&server, store.clone())
            .oneshot(get_req("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "unavailable");
    }

    #[tokio::test]
    async fn openapi_document_served() {
        let server = MockServer::start().await;
        let response = router(&server, Arc::new(MockTransactionStore::new()))
            .oneshot(get_req("/api-docs/openapi.json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
