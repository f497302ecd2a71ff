//! Webpad library - re-exports for testing and external use.
//!
//! A minimalist web notepad: each note is a flat file addressed by a short
//! name taken from the URL, edited in the browser and autosaved back.
//! The application is organized into the following modules:
//!
//! - `names`: Note name validation, generation, and resolution
//! - `store`: Flat-file persistence for note content
//! - `handlers`: HTTP route handlers and raw/editor content negotiation
//! - `templates`: HTML/CSS/JS for the editor page

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeFile;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod handlers;
pub mod names;
pub mod store;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

/// Default directory the notes are saved in. Should be outside any
/// document root if the binary runs behind a file-serving proxy.
pub const SAVE_DIR: &str = "_notes";

/// On-disk location of the favicon served at `/favicon.svg`.
pub const FAVICON_PATH: &str = "static/favicon.svg";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub save_dir: PathBuf,
}

impl AppState {
    /// Build state from the environment: `WEBPAD_DIR` overrides the
    /// default save directory. The directory itself is created lazily on
    /// the first write, so merely visiting a note never touches the disk.
    pub fn new() -> Self {
        let save_dir = env::var("WEBPAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(SAVE_DIR));
        Self { save_dir }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: dir.into(),
        }
    }

    /// Map a validated note name to its storage path. The name is already
    /// constrained to `[A-Za-z0-9_-]`, so a plain join cannot escape the
    /// save directory.
    pub fn note_path(&self, name: &str) -> PathBuf {
        self.save_dir.join(name)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Assemble the application router. Notes are reachable both as
/// `/?note=<name>` and as `/<name>`; every notepad response carries
/// `Cache-Control: no-store` so intermediaries never serve stale content.
/// The favicon sits outside that layer and caches normally.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::view_note).post(handlers::save_note))
        .route("/{name}", get(handlers::view_note).post(handlers::save_note))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .route_service("/favicon.svg", ServeFile::new(FAVICON_PATH))
        .with_state(state)
}

// Re-export commonly used items
pub use names::{generate_name, is_valid_name, resolve_name, NameResolution};
pub use templates::{html_escape, render_editor};
