use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use scouting::{
    router, AppState, FileRubricSource, InMemoryChecklistRepository, InMemoryMatchRepository,
    InMemoryPitRepository,
};

use super::fixtures::reefscape_rubric;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A router backed by an in-memory store and a rubric file on disk.
pub struct TestApp {
    pub router: Router,
    pub rubric_path: PathBuf,
    _dir: TempDir,
}

pub struct TestAppBuilder {
    rubric: Value,
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            rubric: reefscape_rubric(),
        }
    }

    pub fn with_rubric(mut self, rubric: Value) -> Self {
        self.rubric = rubric;
        self
    }

    pub fn build(self) -> TestApp {
        let dir = TempDir::new().expect("temp dir");
        let rubric_path = dir.path().join("config.json");
        std::fs::write(&rubric_path, self.rubric.to_string()).expect("write rubric");

        let state = AppState::new(
            Arc::new(InMemoryMatchRepository::new()),
            Arc::new(InMemoryPitRepository::new()),
            Arc::new(InMemoryChecklistRepository::new()),
            Arc::new(FileRubricSource::new(rubric_path.clone())),
        );

        TestApp {
            router: router(state),
            rubric_path,
            _dir: dir,
        }
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestApp {
    /// Overwrites the rubric file; the next request picks it up.
    pub fn replace_rubric(&self, rubric: &Value) {
        std::fs::write(&self.rubric_path, rubric.to_string()).expect("rewrite rubric");
    }

    pub async fn request(&self, method: &str, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .expect("request builds");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");

        (status, bytes.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.request("GET", uri, Body::empty()).await;
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
        let (status, bytes) = self
            .request(method, uri, Body::from(body.to_string()))
            .await;
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn submit(&self, submission: Value) -> Value {
        let (status, body) = self.send_json("POST", "/api/matches", &submission).await;
        assert_eq!(status, StatusCode::OK, "submit failed: {body}");
        body
    }
}
