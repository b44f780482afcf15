use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[allow(dead_code)]
pub const OK_BODY: &str = r#"{ "kitty": { "id": "1", "ownerId": "1", "ownerFirstName": "John", "ownerLastName": "Doe", "contributionsCounter": 1, "totalCollectedAmount": 100 }, "available": 1 }"#;

#[allow(dead_code)]
pub const KITTY_PATH: &str = "/public/api/kitties/1";

/// Serve `app` on an ephemeral localhost port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_mock(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("Mock upstream has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{}", addr)
}

/// Upstream answering the kitty path with `responses` in order, repeating the
/// last one once exhausted. Every request bumps `hits`.
#[allow(dead_code)]
pub fn sequenced_upstream(
    responses: Vec<(StatusCode, &'static str)>,
    hits: Arc<AtomicUsize>,
) -> Router {
    let responses = Arc::new(responses);
    Router::new().route(
        KITTY_PATH,
        get(move || {
            let responses = responses.clone();
            let hits = hits.clone();
            async move {
                let n = hits.fetch_add(1, Ordering::SeqCst);
                let (status, body) = responses[n.min(responses.len() - 1)];
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    )
}

/// Spawn a sequenced upstream and return the full kitty URL.
#[allow(dead_code)]
pub async fn spawn_upstream(
    responses: Vec<(StatusCode, &'static str)>,
    hits: Arc<AtomicUsize>,
) -> String {
    let base = spawn_mock(sequenced_upstream(responses, hits)).await;
    format!("{}{}", base, KITTY_PATH)
}

/// Spawn an upstream that holds every request for `latency` before answering
/// with `OK_BODY`, and return the full kitty URL.
#[allow(dead_code)]
pub async fn spawn_slow_upstream(latency: Duration, hits: Arc<AtomicUsize>) -> String {
    let app = Router::new().route(
        KITTY_PATH,
        get(move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(latency).await;
                ([(header::CONTENT_TYPE, "application/json")], OK_BODY)
            }
        }),
    );
    let base = spawn_mock(app).await;
    format!("{}{}", base, KITTY_PATH)
}

/// Wait until `check` holds, panicking after five seconds.
#[allow(dead_code)]
pub async fn eventually<F: Fn() -> bool>(check: F) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !check() {
        if tokio::time::Instant::now() > deadline {
            panic!("condition not reached within 5s");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
