//! Test helpers: a scripted mock of the upstream catalog API

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde_json::Value;

pub const TEST_API_KEY: &str = "test-api-key-0123456789";

struct Script {
    responses: Vec<(u16, Value)>,
    delay: Option<Duration>,
    requests: Mutex<Vec<(Instant, String)>>,
}

/// Loopback HTTP server answering every path from a fixed script.
///
/// The n-th request gets the n-th scripted response; once the script runs
/// out the last response repeats.
pub struct MockUpstream {
    base_url: String,
    script: Arc<Script>,
}

impl MockUpstream {
    pub async fn scripted(responses: Vec<(u16, Value)>) -> Self {
        Self::start(responses, None).await
    }

    pub async fn always(status: u16, body: Value) -> Self {
        Self::start(vec![(status, body)], None).await
    }

    pub async fn delayed(delay: Duration, body: Value) -> Self {
        Self::start(vec![(200, body)], Some(delay)).await
    }

    async fn start(responses: Vec<(u16, Value)>, delay: Option<Duration>) -> Self {
        let script = Arc::new(Script {
            responses,
            delay,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(respond).with_state(script.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock upstream");
        let addr = listener.local_addr().expect("Mock upstream has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            script,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn hits(&self) -> usize {
        self.script.requests.lock().unwrap().len()
    }

    /// Path and query of every request received, in order
    pub fn requests(&self) -> Vec<String> {
        self.script
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, uri)| uri.clone())
            .collect()
    }

    /// Time between consecutive requests
    pub fn gaps(&self) -> Vec<Duration> {
        let requests = self.script.requests.lock().unwrap();
        requests
            .windows(2)
            .map(|pair| pair[1].0.duration_since(pair[0].0))
            .collect()
    }
}

async fn respond(State(script): State<Arc<Script>>, uri: Uri) -> impl IntoResponse {
    let index = {
        let mut requests = script.requests.lock().unwrap();
        requests.push((Instant::now(), uri.to_string()));
        requests.len() - 1
    };

    if let Some(delay) = script.delay {
        tokio::time::sleep(delay).await;
    }

    let (status, body) = script
        .responses
        .get(index)
        .or_else(|| script.responses.last())
        .cloned()
        .unwrap_or((200, Value::Null));

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(body),
    )
}

/// A paged list body with `count` films numbered from `first_id`
pub fn film_page(first_id: i64, count: usize) -> Value {
    let results: Vec<Value> = (0..count as i64)
        .map(|offset| {
            serde_json::json!({
                "id": first_id + offset,
                "title": format!("Upstream Film {}", first_id + offset),
                "overview": "Fetched from the live catalog.",
                "poster_path": "/upstream.jpg",
                "backdrop_path": null,
                "release_date": "2024-05-01",
                "vote_average": 7.2,
                "vote_count": 800,
                "genre_ids": [28],
                "popularity": 55.0,
                "adult": false,
                "video": false,
                "original_language": "en",
                "original_title": format!("Upstream Film {}", first_id + offset)
            })
        })
        .collect();

    serde_json::json!({
        "page": 1,
        "results": results,
        "total_pages": 10,
        "total_results": 200
    })
}

/// A paged list body with `count` series numbered from `first_id`
pub fn series_page(first_id: i64, count: usize) -> Value {
    let results: Vec<Value> = (0..count as i64)
        .map(|offset| {
            serde_json::json!({
                "id": first_id + offset,
                "name": format!("Upstream Show {}", first_id + offset),
                "overview": "Fetched from the live catalog.",
                "poster_path": null,
                "backdrop_path": null,
                "first_air_date": "2021-09-17",
                "vote_average": 8.0,
                "vote_count": 1200,
                "genre_ids": [18],
                "popularity": 80.0,
                "original_language": "ko",
                "original_name": format!("Upstream Show {}", first_id + offset)
            })
        })
        .collect();

    serde_json::json!({
        "page": 1,
        "results": results,
        "total_pages": 3,
        "total_results": 60
    })
}
