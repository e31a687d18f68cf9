//! Command interpretation endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::command::CommandResult;
use crate::tasks::Task;
use crate::Error;

/// Build command router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/command", post(interpret))
        .with_state(state)
}

/// Request body for `/api/command`
#[derive(Debug, Deserialize, Serialize)]
pub struct CommandRequest {
    /// Final transcript of one utterance
    pub command: String,
    /// The caller's current task snapshot
    pub tasks: Vec<Task>,
}

/// Interpreted command plus optional spoken feedback
#[derive(Debug, Deserialize, Serialize)]
pub struct CommandResponse {
    /// The validated command outcome
    #[serde(flatten)]
    pub result: CommandResult,

    /// Base64 MP3 of the feedback, when synthesis is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Interpret one voice command against the caller's task snapshot.
///
/// Business-logic outcomes (`impossible`, `unknown`) are 200; only
/// transport-level failures use non-2xx, and even those carry a
/// well-formed result envelope.
async fn interpret(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<CommandResponse>, CommandError> {
    let command = body
        .get("command")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| Error::InvalidRequest("No command received.".to_string()))?;

    let tasks: Vec<Task> = match body.get("tasks") {
        Some(value) if value.is_array() => serde_json::from_value(value.clone())
            .map_err(|_| Error::InvalidRequest("Invalid tasks data.".to_string()))?,
        _ => return Err(Error::InvalidRequest("Invalid tasks data.".to_string()).into()),
    };

    tracing::info!(command = %command, tasks = tasks.len(), "command received");

    let result = state.relay.interpret(command, &tasks).await?;
    let audio = state.relay.speak(&result.feedback).await;

    Ok(Json(CommandResponse { result, audio }))
}

/// Transport-level failure wrapper. The body stays a well-formed result
/// envelope so clients never special-case error shapes.
struct CommandError(Error);

impl From<Error> for CommandError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let (status, feedback) = match &self.0 {
            Error::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Request timeout. Try again.".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI is busy. Please try again.".to_string(),
            ),
        };

        tracing::error!(error = %self.0, status = %status, "command request failed");

        (status, Json(CommandResult::unknown(feedback))).into_response()
    }
}
