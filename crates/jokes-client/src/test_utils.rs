//! Test utilities for joke sources
//!
//! - [`ScriptedJokeSource`]: in-memory source returning queued results, with
//!   optional gates so tests control exactly when a fetch resolves.
//! - [`StubServer`]: axum server on `127.0.0.1` serving canned responses,
//!   for exercising the real `reqwest` client.

use std::collections::VecDeque;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use jokes_core::Joke;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

use crate::source::{FetchError, FetchResult, JokeSource};

// ─────────────────────────────────────────────────────────────────────────────
// ScriptedJokeSource
// ─────────────────────────────────────────────────────────────────────────────

enum Step {
    Ready(FetchResult),
    Gated(oneshot::Receiver<()>, FetchResult),
}

/// Releases a gated fetch when [`Gate::release`] is called.
///
/// Dropping the gate without releasing also lets the fetch resolve.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

/// Joke source that replays a queue of results.
///
/// Once the queue is empty, the repeat result (if set) is returned forever;
/// otherwise fetches fail with a network error.
#[derive(Default)]
pub struct ScriptedJokeSource {
    steps: Mutex<VecDeque<Step>>,
    repeat: Mutex<Option<FetchResult>>,
    calls: AtomicUsize,
}

impl ScriptedJokeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that always answers with `text`
    pub fn always_ok(text: &str) -> Self {
        let source = Self::new();
        source.repeat(Ok(Joke::new(text)));
        source
    }

    /// Source that always fails with `err`
    pub fn always_err(err: FetchError) -> Self {
        let source = Self::new();
        source.repeat(Err(err));
        source
    }

    pub fn push_ok(&self, text: &str) {
        self.push(Step::Ready(Ok(Joke::new(text))));
    }

    pub fn push_err(&self, err: FetchError) {
        self.push(Step::Ready(Err(err)));
    }

    /// Queue a result that is only delivered once the returned gate is released
    pub fn push_gated(&self, result: FetchResult) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(Step::Gated(rx, result));
        Gate(tx)
    }

    pub fn repeat(&self, result: FetchResult) {
        *self.repeat.lock().unwrap() = Some(result);
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, step: Step) {
        self.steps.lock().unwrap().push_back(step);
    }

    fn next_step(&self) -> Step {
        if let Some(step) = self.steps.lock().unwrap().pop_front() {
            return step;
        }
        let repeat = self.repeat.lock().unwrap().clone();
        Step::Ready(repeat.unwrap_or_else(|| Err(FetchError::network("script exhausted"))))
    }
}

impl JokeSource for ScriptedJokeSource {
    async fn fetch_joke(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_step() {
            Step::Ready(result) => result,
            Step::Gated(gate, result) => {
                let _ = gate.await;
                result
            }
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StubServer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct StubState {
    responses: Arc<Vec<(StatusCode, String)>>,
    requests: Arc<AtomicUsize>,
    delay: Arc<Mutex<Duration>>,
}

/// Local axum server answering `GET /api/joke` with canned responses.
///
/// Responses are served in order; the last one repeats.
pub struct StubServer {
    addr: SocketAddr,
    state: StubState,
    task: tokio::task::JoinHandle<()>,
}

impl StubServer {
    /// Serve `body` with `status` for every request
    pub async fn json(status: u16, body: &str) -> Self {
        Self::sequence(&[(status, body)]).await
    }

    /// Serve each `(status, body)` in turn, repeating the last one
    pub async fn sequence(responses: &[(u16, &str)]) -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");

        let state = StubState {
            responses: Arc::new(
                responses
                    .iter()
                    .map(|(status, body)| {
                        let status = StatusCode::from_u16(*status).expect("valid status code");
                        (status, body.to_string())
                    })
                    .collect(),
            ),
            requests: Arc::new(AtomicUsize::new(0)),
            delay: Arc::new(Mutex::new(Duration::ZERO)),
        };

        let router = Router::new()
            .route("/api/joke", get(serve_joke))
            .with_state(state.clone());

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state, task }
    }

    /// Delay every response by `delay`
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.state.delay.lock().unwrap() = delay;
        self
    }

    /// URL of the joke endpoint on this server
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/api/joke", self.addr)).expect("stub server url")
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// A URL nothing is listening on
    pub async fn unreachable_url() -> Url {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("bind throwaway listener");
        let addr = listener.local_addr().expect("throwaway address");
        drop(listener);
        Url::parse(&format!("http://{}/api/joke", addr)).expect("unreachable url")
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve_joke(State(stub): State<StubState>) -> impl IntoResponse {
    let index = stub.requests.fetch_add(1, Ordering::SeqCst);
    let (status, body) = stub
        .responses
        .get(index)
        .or_else(|| stub.responses.last())
        .cloned()
        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, String::new()));

    let delay = *stub.delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_source_replays_in_order() {
        let source = ScriptedJokeSource::new();
        source.push_ok("first");
        source.push_err(FetchError::Status(500));

        assert_eq!(source.fetch_joke().await, Ok(Joke::new("first")));
        assert_eq!(source.fetch_joke().await, Err(FetchError::Status(500)));
        assert!(matches!(
            source.fetch_joke().await,
            Err(FetchError::Network(_))
        ));
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn test_ungated_steps_need_no_runtime() {
        let source = ScriptedJokeSource::always_err(FetchError::Timeout);
        assert_eq!(
            tokio_test::block_on(source.fetch_joke()),
            Err(FetchError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_scripted_source_repeat() {
        let source = ScriptedJokeSource::always_ok("same");
        assert_eq!(source.fetch_joke().await, Ok(Joke::new("same")));
        assert_eq!(source.fetch_joke().await, Ok(Joke::new("same")));
    }

    #[tokio::test]
    async fn test_gated_step_waits_for_release() {
        let source = Arc::new(ScriptedJokeSource::new());
        let gate = source.push_gated(Ok(Joke::new("gated")));

        let task = {
            let source = source.clone();
            tokio::spawn(async move { source.fetch_joke().await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!task.is_finished());

        gate.release();
        assert_eq!(task.await.unwrap(), Ok(Joke::new("gated")));
    }

    #[tokio::test]
    async fn test_stub_server_sequence_repeats_last() {
        let server = StubServer::sequence(&[(500, ""), (200, r#"{"joke":"x"}"#)]).await;
        let client = reqwest::Client::new();

        let first = client.get(server.url()).send().await.unwrap();
        assert_eq!(first.status().as_u16(), 500);
        let second = client.get(server.url()).send().await.unwrap();
        assert_eq!(second.status().as_u16(), 200);
        let third = client.get(server.url()).send().await.unwrap();
        assert_eq!(third.status().as_u16(), 200);
        assert_eq!(server.request_count(), 3);
    }

    #[tokio::test]
    async fn test_stub_server_other_paths_are_not_found() {
        let server = StubServer::json(200, r#"{"joke":"x"}"#).await;
        let mut url = server.url();
        url.set_path("/api/other");

        let response = reqwest::get(url).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(server.request_count(), 0);
    }

    #[tokio::test]
    async fn test_stub_server_serves_json_content_type() {
        let server = StubServer::json(418, r#"{"joke":"teapot"}"#).await;

        let response = reqwest::get(server.url()).await.unwrap();
        assert_eq!(response.status().as_u16(), 418);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(response.text().await.unwrap(), r#"{"joke":"teapot"}"#);
    }
}
