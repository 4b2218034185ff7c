//! API routes for honord
//!
//! Three slash-command endpoints plus a health probe. Command bodies arrive
//! form-encoded; only the `text` field matters, everything else a Slack
//! slash command sends is ignored.

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};
use honor_common::response::SlackResponse;
use honor_common::{classify, response, HonorError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

pub fn honor_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/honor", post(honor))
        .route("/sethonor", post(set_honor))
        .route("/removehonor", post(remove_honor))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

/// Form payload of a slash-command request.
#[derive(Debug, Deserialize)]
pub struct CommandForm {
    text: Option<String>,
}

/// Announce whether a phrase has honor. Querying never stores anything.
async fn honor(
    State(state): State<AppStateArc>,
    Form(form): Form<CommandForm>,
) -> Result<Json<SlackResponse>, (StatusCode, String)> {
    let text = require_text(form.text)?;

    let memory = state.store.load().map_err(store_error)?;
    let honorable = classify::is_honorable(&memory, &text);
    info!(
        "Classified '{}' as {}",
        text,
        if honorable { "honorable" } else { "dishonorable" }
    );

    Ok(Json(response::classification(&text, honorable)))
}

/// Store an explicit judgment, payload `<phrase>:<true|false>`.
async fn set_honor(
    State(state): State<AppStateArc>,
    Form(form): Form<CommandForm>,
) -> Result<Json<SlackResponse>, (StatusCode, String)> {
    let text = require_text(form.text)?;
    let (phrase, honorable) =
        parse_set_directive(&text).map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    state
        .store
        .update(|memory| memory.set_honor(phrase, honorable))
        .map_err(store_error)?;
    info!("Stored override: '{}' -> {}", phrase, honorable);

    Ok(Json(response::override_saved(phrase, honorable)))
}

/// Drop a stored judgment, if any.
async fn remove_honor(
    State(state): State<AppStateArc>,
    Form(form): Form<CommandForm>,
) -> Result<Json<SlackResponse>, (StatusCode, String)> {
    let text = require_text(form.text)?;

    let found = state
        .store
        .update(|memory| memory.remove(&text))
        .map_err(store_error)?;

    if found {
        info!("Dropped override for '{}'", text);
        Ok(Json(response::forgotten(&text)))
    } else {
        Ok(Json(response::not_found(&text)))
    }
}

/// Split a `/sethonor` payload into its phrase and judgment parts.
///
/// The phrase is everything before the first colon; the token after it must
/// spell `true` or `false` in any case.
fn parse_set_directive(text: &str) -> Result<(&str, bool), HonorError> {
    let (phrase, token) = text.split_once(':').ok_or(HonorError::InvalidSetFormat)?;
    if token.eq_ignore_ascii_case("true") {
        Ok((phrase, true))
    } else if token.eq_ignore_ascii_case("false") {
        Ok((phrase, false))
    } else {
        Err(HonorError::InvalidSetFormat)
    }
}

fn require_text(text: Option<String>) -> Result<String, (StatusCode, String)> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            let err = HonorError::MissingParameter("text");
            Err((StatusCode::BAD_REQUEST, err.to_string()))
        }
    }
}

fn store_error(err: HonorError) -> (StatusCode, String) {
    error!("Store failure: {}", err);
    (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
}

/// Health payload for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub store: String,
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        store: state.store.backend_name().to_string(),
    })
}
