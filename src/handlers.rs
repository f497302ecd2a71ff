//! HTTP route handlers for the notepad.
//!
//! One handler pair serves the whole surface: `view_note` answers GET
//! requests with either the editor page or the raw note bytes, and
//! `save_note` answers POST requests by writing (or, for empty content,
//! deleting) the note. Both resolve the note name first and redirect to a
//! freshly generated name when none or an invalid one was supplied.

use crate::names::{resolve_name, NameResolution};
use crate::store;
use crate::templates::render_editor;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct NoteQuery {
    pub note: Option<String>,
    pub raw: Option<String>,
}

// ============================================================================
// View Handler
// ============================================================================

pub async fn view_note(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    Query(query): Query<NoteQuery>,
    headers: HeaderMap,
) -> Response {
    let requested = path
        .as_ref()
        .map(|Path(name)| name.as_str())
        .or(query.note.as_deref());

    let name = match resolve_name(requested) {
        NameResolution::Valid(name) => name,
        NameResolution::Redirect(fresh) => return redirect_to(&fresh),
    };

    let note_path = state.note_path(&name);

    if wants_raw(&query, &headers) {
        return match store::read(&note_path) {
            Ok(Some(bytes)) => {
                ([(header::CONTENT_TYPE, "text/plain")], bytes).into_response()
            }
            Ok(None) => StatusCode::NOT_FOUND.into_response(),
            Err(e) => storage_error(&name, e),
        };
    }

    match store::read(&note_path) {
        Ok(bytes) => {
            let content = bytes.unwrap_or_default();
            Html(render_editor(&name, &String::from_utf8_lossy(&content))).into_response()
        }
        Err(e) => storage_error(&name, e),
    }
}

/// Raw mode is explicit (`raw` in the query, any value) or inferred from
/// plain-fetch tools by User-Agent prefix. The header is client-supplied
/// and spoofable; this is content negotiation, not a security boundary.
fn wants_raw(query: &NoteQuery, headers: &HeaderMap) -> bool {
    if query.raw.is_some() {
        return true;
    }
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.starts_with("curl") || ua.starts_with("Wget"))
        .unwrap_or(false)
}

// ============================================================================
// Save Handler
// ============================================================================

pub async fn save_note(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    Query(query): Query<NoteQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let requested = path
        .as_ref()
        .map(|Path(name)| name.as_str())
        .or(query.note.as_deref());

    let name = match resolve_name(requested) {
        NameResolution::Valid(name) => name,
        NameResolution::Redirect(fresh) => return redirect_to(&fresh),
    };

    let text = post_text(&headers, &body);

    match store::write(&state.note_path(&name), &text) {
        Ok(()) => {
            if text.is_empty() {
                tracing::debug!(%name, "deleted note");
            } else {
                tracing::debug!(%name, bytes = text.len(), "saved note");
            }
            StatusCode::OK.into_response()
        }
        Err(e) => storage_error(&name, e),
    }
}

/// Extract the content to save: the `text` field of a form-encoded body,
/// falling back to the raw request body when the body is not a form or
/// carries no `text` field.
fn post_text(headers: &HeaderMap, body: &[u8]) -> Vec<u8> {
    let form_encoded = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    if form_encoded {
        if let Some(text) = form_field(body, b"text") {
            return text;
        }
    }
    body.to_vec()
}

/// Decode one field of a form-encoded body. Form semantics: `+` means
/// space, percent-sequences decode to bytes, a key without `=` has an
/// empty value, and the last occurrence of the field wins.
fn form_field(body: &[u8], field: &[u8]) -> Option<Vec<u8>> {
    let mut found = None;
    for pair in body.split(|&b| b == b'&') {
        let mut halves = pair.splitn(2, |&b| b == b'=');
        let key = halves.next().unwrap_or_default();
        if decode_component(key) != field {
            continue;
        }
        let value = halves.next().unwrap_or_default();
        found = Some(decode_component(value));
    }
    found
}

fn decode_component(raw: &[u8]) -> Vec<u8> {
    let unplussed: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    urlencoding::decode_binary(&unplussed).into_owned()
}

// ============================================================================
// Response Helpers
// ============================================================================

/// 302 to the freshly generated name. Built by hand: axum's `Redirect`
/// constructors emit 303/307/308, and this endpoint answers plain `Found`.
fn redirect_to(name: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, format!("/{}", name))]).into_response()
}

fn storage_error(name: &str, err: std::io::Error) -> Response {
    tracing::error!(%name, error = %err, "storage failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Storage error: {}", err),
    )
        .into_response()
}

// ============================================================================
// Tests
// ============================================================================
