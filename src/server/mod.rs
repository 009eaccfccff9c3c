//! Public page server
//!
//! Serves the rendered site from an in-memory snapshot of the content
//! document. A background task re-loads the document from the store on a
//! fixed interval and swaps the snapshot in each tick, whether or not it
//! changed, so an admin save becomes visible within one polling interval
//! without a restart. The poller is aborted when the server shuts down.

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;

use crate::content::{ContentStore, SiteContent};
use crate::templates::TemplateRenderer;
use crate::Studio;

/// Server state shared across handlers
struct ServerState {
    config: crate::config::StudioConfig,
    renderer: TemplateRenderer,
    snapshot: Arc<RwLock<SiteContent>>,
}

/// Start the public page server
pub async fn start(studio: &Studio, ip: &str, port: u16) -> Result<()> {
    let store: Arc<dyn ContentStore> = Arc::new(studio.store());
    let snapshot = Arc::new(RwLock::new(store.load()));

    let state = Arc::new(ServerState {
        config: studio.config.clone(),
        renderer: TemplateRenderer::new()?,
        snapshot: snapshot.clone(),
    });

    let assets_dir = studio.assets_dir();
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/content.json", get(content_handler))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!(
        "Content refresh every {} ms. Press Ctrl+C to stop.",
        studio.config.poll_interval_ms
    );

    let poller = spawn_poller(
        store,
        snapshot,
        Duration::from_millis(studio.config.poll_interval_ms),
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app).await;

    // No leaked timers once the listener is gone.
    poller.abort();
    served?;

    Ok(())
}

/// Re-load the document from the store on every tick, replacing the
/// snapshot unconditionally (no diffing).
fn spawn_poller(
    store: Arc<dyn ContentStore>,
    snapshot: Arc<RwLock<SiteContent>>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick fires immediately; the snapshot is already fresh.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let latest = store.load();
            match snapshot.write() {
                Ok(mut slot) => *slot = latest,
                Err(_) => {
                    tracing::error!("Content snapshot lock poisoned, stopping poller");
                    break;
                }
            }
        }
    })
}

/// Render the public page from the current snapshot
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let content = match state.snapshot.read() {
        Ok(slot) => slot.clone(),
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    };

    match state.renderer.render_index(&state.config, &content) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

/// Current document as JSON
async fn content_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.snapshot.read() {
        Ok(slot) => Json(slot.clone()).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}
