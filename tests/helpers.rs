#![allow(dead_code)]

use axum::Router;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

use blogsum::{
    app_state::AppState,
    fetcher::HttpFetcher,
    generation::{
        GeminiBackend, GenerationError, GenerativeBackend, RetryPolicy, Summarizer, Translator,
    },
    pipeline::Pipeline,
    repositories::{MemorySummaryStore, SummaryStore},
    router::build_router,
};

pub const SUMMARY_MARKER: &str = "expert content summarizer";
pub const TRANSLATION_MARKER: &str = "Translate the following";
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(500);

pub const PROSE: &str = "Every spring the apricot trees in Hunza bloom within a few days of \
each other, and the whole valley turns pale pink almost overnight. Farmers walk the terraces \
at dawn checking for frost, while schoolchildren take the long way home just to pass under the \
branches. Visitors arrive by the busload, but the best views are from the old watchtower above \
Karimabad, where the river glints far below and the peaks of Rakaposhi catch the last light of \
the evening. By the time the petals fall, the first green fruit is already visible.";

pub struct TestApp {
    pub router: Router,
    pub pipeline: Arc<Pipeline>,
    pub store: MemorySummaryStore,
    pub gemini: MockServer,
    pub blog: MockServer,
}

impl TestApp {
    pub fn blog_url(&self, route: &str) -> String {
        format!("{}{}", self.blog.uri(), route)
    }
}

/// Same attempt count as production, but millisecond backoff.
pub fn fast_policy() -> RetryPolicy<GenerationError> {
    RetryPolicy::linear(3, Duration::from_millis(10), GenerationError::is_retryable)
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(MemorySummaryStore::new()).await
}

pub async fn spawn_app_with_store(store: MemorySummaryStore) -> TestApp {
    let gemini = MockServer::start().await;
    let blog = MockServer::start().await;

    let backend: Arc<dyn GenerativeBackend> =
        Arc::new(GeminiBackend::new(gemini.uri(), "gemini-test", "test-key").unwrap());
    let shared_store: Arc<dyn SummaryStore> = Arc::new(store.clone());

    let pipeline = Pipeline::new(
        Arc::new(HttpFetcher::new(FETCH_TIMEOUT)),
        Summarizer::with_policy(backend.clone(), fast_policy()),
        Translator::with_policy(backend, fast_policy()),
        shared_store.clone(),
    );
    let state = AppState::new(pipeline, shared_store, true);

    TestApp {
        router: build_router(state.clone()),
        pipeline: state.pipeline,
        store,
        gemini,
        blog,
    }
}

pub fn article_page(title: &str, prose: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
  <nav><a href="/">Home</a> <a href="/about">About</a></nav>
  <article><h1>{title}</h1><p>{prose}</p></article>
  <footer>Copyright 2024. All rights reserved.</footer>
</body>
</html>"#
    )
}

pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(html.into_bytes())
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub fn gemini_text(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    }))
}

pub fn gemini_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {"code": status, "message": message}
    }))
}

/// Mounts a generateContent response for prompts containing `marker`.
pub async fn mount_gemini(
    server: &MockServer,
    marker: &str,
    response: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(body_string_contains(marker))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}
