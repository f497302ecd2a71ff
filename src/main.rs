//! Webpad - a minimalist web notepad.
//!
//! This is the main entry point for the notepad server. Visiting `/`
//! redirects to a freshly generated note name; visiting `/<name>` opens
//! the editor for that note, which autosaves back to the same URL.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use webpad::{router, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("webpad=info")),
        )
        .init();

    let state = Arc::new(AppState::new());
    let save_dir = state.save_dir.clone();

    let app = router(state);

    let addr = std::env::var("WEBPAD_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Notepad server running at http://{}", addr);
    tracing::info!("Save directory: {}", save_dir.display());

    axum::serve(listener, app).await.expect("Server error");
}
