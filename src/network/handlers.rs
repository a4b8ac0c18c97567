//! Request Handlers
//!
//! Translate HTTP requests into store commands and store results into
//! plain-text responses.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::error::{KvError, Result};
use crate::protocol::{Command, CommandType, KeyBody, KeyQuery, KeyValueBody, HEALTH_PATH};
use crate::store::Store;

/// Build the router serving every route against `store`
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(CommandType::Get.path(), get(get_value))
        .route(CommandType::Put.path(), post(put_value))
        .route(CommandType::Delete.path(), delete(delete_key))
        .route(CommandType::Update.path(), post(update_value))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// HTTP status for an error kind
pub fn status_code(error: &KvError) -> StatusCode {
    match error {
        KvError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        KvError::MissingField(_) | KvError::UnknownCommand(_) | KvError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        KvError::Config(_) | KvError::Connection(_) | KvError::Io(_) | KvError::Http(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for KvError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!("Rejected request: {}", self);
        } else {
            tracing::warn!("Request failed: {}", self);
        }
        (status_code(&self), self.to_string()).into_response()
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn get_value(
    State(store): State<Arc<Store>>,
    Query(query): Query<KeyQuery>,
) -> Result<String> {
    let key = query.into_key()?;
    tracing::debug!("GET {}", key);
    execute(&store, Command::Get { key })
}

async fn put_value(
    State(store): State<Arc<Store>>,
    Json(body): Json<KeyValueBody>,
) -> Result<String> {
    let (key, value) = body.into_pair()?;
    tracing::debug!("PUT {}", key);
    execute(&store, Command::Put { key, value })
}

async fn delete_key(State(store): State<Arc<Store>>, Json(body): Json<KeyBody>) -> Result<String> {
    let key = body.into_key()?;
    tracing::debug!("DELETE {}", key);
    execute(&store, Command::Delete { key })
}

async fn update_value(
    State(store): State<Arc<Store>>,
    Json(body): Json<KeyValueBody>,
) -> Result<String> {
    let (key, value) = body.into_pair()?;
    tracing::debug!("UPDATE {}", key);
    execute(&store, Command::Update { key, value })
}

/// Absent results become an empty body
fn execute(store: &Store, command: Command) -> Result<String> {
    Ok(store.execute(command)?.unwrap_or_default())
}
