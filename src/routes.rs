use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the gateway router, allowing cross-origin calls from `cors_origin` only.
pub fn app_router(cors_origin: &str) -> Result<Router<AppState>> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {cors_origin}"))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .merge(crate::api::routes::log_routes::log_routes())
        .merge(crate::api::routes::config_routes::config_routes());

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback(handler_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state;
    use crate::config::AppConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct Fixture {
        dir: TempDir,
        app: Router,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir(dir.path().join("logs")).unwrap();

            let cfg = AppConfig {
                logs_dir: dir.path().join("logs"),
                config_file: dir.path().join("config.json"),
                gateway_addr: "127.0.0.1:0".parse().unwrap(),
                ui_addr: "127.0.0.1:0".parse().unwrap(),
                cors_origin: "http://localhost:3000".to_string(),
                gateway_url: "http://127.0.0.1:4000".to_string(),
                self_log_dir: None,
            };
            let app = app_router(&cfg.cors_origin)
                .unwrap()
                .with_state(build_app_state(&cfg));
            Self { dir, app }
        }

        fn write_log(&self, name: &str, content: &str) {
            fs::write(self.dir.path().join("logs").join(name), content).unwrap();
        }

        async fn send(&self, req: Request<Body>) -> (StatusCode, String) {
            let resp = self.app.clone().oneshot(req).await.unwrap();
            let status = resp.status();
            let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            (status, String::from_utf8(body.to_vec()).unwrap())
        }

        async fn get(&self, uri: &str) -> (StatusCode, String) {
            self.send(Request::get(uri).body(Body::empty()).unwrap()).await
        }

        async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, String) {
            let req = Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();
            self.send(req).await
        }
    }

    #[tokio::test]
    async fn list_logs_returns_only_txt_entries() {
        let fx = Fixture::new();
        fx.write_log("a.txt", "A");
        fx.write_log("b.log", "B");
        fx.write_log("c.txt", "C");

        let (status, body) = fx.get("/api/logs").await;
        assert_eq!(status, StatusCode::OK);

        let mut names: Vec<String> = serde_json::from_str(&body).unwrap();
        names.sort();
        assert_eq!(names, vec!["a.txt", "c.txt"]);
    }

    #[tokio::test]
    async fn list_logs_fails_with_500_when_directory_is_missing() {
        let fx = Fixture::new();
        fs::remove_dir(fx.dir.path().join("logs")).unwrap();

        let (status, body) = fx.get("/api/logs").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Failed to read logs directory"));
    }

    #[tokio::test]
    async fn read_log_returns_raw_text() {
        let fx = Fixture::new();
        fx.write_log("app.txt", "first\nsecond\n");

        let (status, body) = fx.get("/api/logs/app.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "first\nsecond\n");
    }

    #[tokio::test]
    async fn read_missing_log_is_a_500_not_empty_success() {
        let fx = Fixture::new();

        let (status, body) = fx.get("/api/logs/ghost.txt").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn encoded_traversal_is_rejected() {
        let fx = Fixture::new();
        fs::write(fx.dir.path().join("config.json"), "{\"secret\":1}").unwrap();

        let (status, body) = fx.get("/api/logs/..%2Fconfig.json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.contains("secret"));
    }

    #[tokio::test]
    async fn get_config_double_encodes_raw_text() {
        let fx = Fixture::new();
        fs::write(fx.dir.path().join("config.json"), "{\"a\":1}").unwrap();

        let (status, body) = fx.get("/api/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#""{\"a\":1}""#);
    }

    #[tokio::test]
    async fn post_then_get_config_round_trips() {
        let fx = Fixture::new();
        fs::write(fx.dir.path().join("config.json"), "{\"a\":1}").unwrap();

        let (status, body) = fx.post_json("/api/config", r#"{"b":2}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Config saved");

        let (_, body) = fx.get("/api/config").await;
        assert_eq!(body, r#""{\n  \"b\": 2\n}""#);

        let raw: String = serde_json::from_str(&body).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, serde_json::json!({"b": 2}));
    }

    #[tokio::test]
    async fn failed_config_write_is_a_500_with_error_text() {
        let fx = Fixture::new();
        fs::create_dir(fx.dir.path().join("config.json")).unwrap();

        let (status, body) = fx.post_json("/api/config", r#"{"b":2}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Failed to finalize config file"), "{body}");
        assert!(!body.contains("Config saved"));
    }

    #[tokio::test]
    async fn missing_config_is_a_500() {
        let fx = Fixture::new();
        let (status, _) = fx.get("/api/config").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn malformed_json_body_is_rejected_before_writing() {
        let fx = Fixture::new();
        let (status, _) = fx.post_json("/api/config", "{not json").await;
        assert!(status.is_client_error());
        assert!(!fx.dir.path().join("config.json").exists());
    }

    #[tokio::test]
    async fn cors_allows_only_the_configured_origin() {
        let fx = Fixture::new();
        let preflight = |origin: &str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/config")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap()
        };

        let resp = fx.app.clone().oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );

        let resp = fx.app.clone().oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let fx = Fixture::new();
        let (status, body) = fx.get("/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "The requested resource was not found");
    }
}
