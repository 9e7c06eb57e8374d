//! Title resolution API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use titlelink_core::{Candidate, CatalogMode, EquivalenceTest, QueryForm};
use tracing::debug;

use super::handlers::ErrorResponse;
use crate::metrics::{RESOLUTIONS_TOTAL, RESOLUTION_CANDIDATES};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub query: String,
    #[serde(default)]
    pub candidates: Vec<Candidate<Value>>,
    /// Overrides the configured catalog mode.
    #[serde(default)]
    pub mode: Option<CatalogMode>,
    /// Overrides the configured relaxed fallback switch.
    #[serde(default)]
    pub relaxed_fallback: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolveResponse {
    Found {
        id: Value,
        index: usize,
        test: EquivalenceTest,
        form: QueryForm,
    },
    NotFound,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/resolve
///
/// Resolve a free-form title against an ordered candidate list.
/// Identifiers are echoed back untouched and must be strings or numbers.
pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Some(position) = body
        .candidates
        .iter()
        .position(|c| !(c.id.is_string() || c.id.is_number()))
    {
        return Err(ErrorResponse::unprocessable(format!(
            "candidates[{}].id must be a string or a number",
            position
        )));
    }

    let resolver = state.resolver(body.mode, body.relaxed_fallback);
    let mode = resolver.config().mode.as_str();

    RESOLUTION_CANDIDATES
        .with_label_values(&[mode])
        .observe(body.candidates.len() as f64);

    let response = match resolver.resolve_with_trace(&body.query, &body.candidates) {
        Some(hit) => {
            let outcome = if hit.test.is_relaxed() {
                "relaxed"
            } else {
                "strict"
            };
            RESOLUTIONS_TOTAL
                .with_label_values(&[mode, outcome, hit.test.as_str()])
                .inc();
            ResolveResponse::Found {
                id: body.candidates[hit.index].id.clone(),
                index: hit.index,
                test: hit.test,
                form: hit.form,
            }
        }
        None => {
            RESOLUTIONS_TOTAL
                .with_label_values(&[mode, "not_found", "none"])
                .inc();
            ResolveResponse::NotFound
        }
    };

    debug!(
        "Resolve {:?} against {} candidates ({}): {:?}",
        body.query,
        body.candidates.len(),
        mode,
        response
    );

    Ok(Json(response))
}
