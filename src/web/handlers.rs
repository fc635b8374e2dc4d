//! HTTP request handlers

use super::state::AppState;
use crate::encoder::EncodedSuggestion;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inbound `serverQuerySuggestions` call
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySuggestionsRequest {
    /// Opaque id echoed back in the response
    pub request_id: serde_json::Value,
    /// Search term as typed
    pub term: String,
}

/// Outbound `setSuggestions` call
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub request_id: serde_json::Value,
    pub suggestions: Vec<EncodedSuggestion>,
    /// Icon key to URL
    pub resources: IndexMap<String, String>,
}

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("suggestion provider failed: {0}")]
    Provider(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{:#}", self);
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Suggestion query handler
pub async fn query_suggestions(
    State(state): State<AppState>,
    Json(request): Json<QuerySuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let extension = state.extension.read().await;
    let message = extension
        .server_query_suggestions(request.request_id, &request.term)
        .await
        .map_err(ApiError::Provider)?;

    Ok(Json(SuggestionsResponse {
        request_id: message.request_id,
        suggestions: message.suggestions,
        resources: message.resources.resolve(state.theme_base_url()),
    }))
}

/// Client configuration handler
pub async fn client_state(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.extension.read().await.client_state())
}

/// Stats handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
