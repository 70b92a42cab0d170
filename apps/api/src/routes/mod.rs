pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::drafting::handlers as drafting;
use crate::matching::handlers as matching;
use crate::state::AppState;

/// Resume PDFs are usually well under this.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match", post(matching::handle_match))
        .route(
            "/api/v1/match/upload",
            post(matching::handle_match_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Drafting API
        .route(
            "/api/v1/jobs/draft-description",
            post(drafting::handle_draft_description),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::local::TOO_SHORT_MESSAGE;

    fn local_only_state() -> AppState {
        AppState {
            config: Config {
                gemini_api_key: None,
                remote_timeout_secs: 5,
                port: 0,
                rust_log: "info".to_string(),
            },
            generator: None,
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(local_only_state())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["remote_scoring"], false);
    }

    #[tokio::test]
    async fn test_match_scores_locally() {
        let (status, body) = send(post_json(
            "/api/v1/match",
            json!({
                "requirements": "Python Django REST API experience required",
                "resume_text": "Experienced Python developer with Django and REST API background"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scorer_backend"], "local");
        assert!(body["score"].as_f64().unwrap() > 50.0);
        assert!(body["analysis"]
            .as_str()
            .unwrap()
            .contains("**Matched Keywords**: django, python, rest, api"));
        assert!(body["analyzed_at"].is_string());
    }

    #[tokio::test]
    async fn test_match_short_resume() {
        let (status, body) = send(post_json(
            "/api/v1/match",
            json!({"requirements": "Senior Java Backend Engineer", "resume_text": "a"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0.0);
        assert_eq!(body["analysis"], TOO_SHORT_MESSAGE);
    }

    #[tokio::test]
    async fn test_match_defaults_empty_requirements() {
        let (_, body) = send(post_json(
            "/api/v1/match",
            json!({"resume_text": "Seasoned general manager with broad job experience in retail"}),
        ))
        .await;
        let analysis = body["analysis"].as_str().unwrap();
        assert!(analysis.contains("**Matched Keywords**: general, job"));
        assert!(analysis.contains("**Missing/Unmatched Terms**: requirements"));
    }

    #[tokio::test]
    async fn test_upload_with_unreadable_pdf() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"requirements\"\r\n\r\n\
             Senior Rust Engineer\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             not really a pdf\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0.0);
        assert_eq!(body["analysis"], TOO_SHORT_MESSAGE);
    }

    #[tokio::test]
    async fn test_draft_description_template() {
        let (status, body) = send(post_json(
            "/api/v1/jobs/draft-description",
            json!({"title": "Platform Engineer", "prompt": "Terraform"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["description"]
            .as_str()
            .unwrap()
            .contains("talented Platform Engineer"));
        assert!(body["requirements"]
            .as_str()
            .unwrap()
            .starts_with("- Terraform (Key Requirement)"));
    }

    #[tokio::test]
    async fn test_draft_description_requires_title() {
        let (status, body) = send(post_json(
            "/api/v1/jobs/draft-description",
            json!({"title": "   "}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
