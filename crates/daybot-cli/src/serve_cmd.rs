use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use daybot_core::assistant::Assistant;
use daybot_core::model::today;
use daybot_core::{PlanContext, format_plan};

/// Prefixed to the fallback plan when a request cannot be answered normally.
pub const ERROR_PREFACE: &str = "I hit an error. Here's a simple plan instead.";

/// Prompt used for the fallback plan.
const FALLBACK_PROMPT: &str = "Plan my day";

// ---------------------------------------------------------------------------
// State and wire types
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    assistant: Arc<dyn Assistant>,
}

#[derive(Debug, Deserialize)]
pub struct AiRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: Option<PlanContext>,
}

#[derive(Debug, Serialize)]
pub struct AiResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub assistant: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(assistant: Arc<dyn Assistant>) -> Router {
    Router::new()
        .route("/api/ai", post(ai))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { assistant })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(assistant: Arc<dyn Assistant>, bind: &str, port: u16) -> Result<()> {
    let assistant_name = assistant.name().to_string();
    let app = build_router(assistant);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    info!(assistant = %assistant_name, "daybot serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("daybot serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl+C: {e}");
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /api/ai`. Always answers 200; failures degrade to the fallback plan.
async fn ai(State(state): State<AppState>, body: Bytes) -> Json<AiResponse> {
    let request: AiRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            warn!("malformed /api/ai body: {e}");
            return Json(AiResponse {
                reply: fallback_reply(),
            });
        }
    };

    let ctx = request
        .context
        .unwrap_or_else(|| PlanContext::empty(today()));

    let reply = match state.assistant.reply(&request.message, &ctx).await {
        Ok(reply) => reply.trim().to_string(),
        Err(e) => {
            warn!(assistant = state.assistant.name(), "assistant failed: {e:#}");
            fallback_reply()
        }
    };

    Json(AiResponse { reply })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        assistant: state.assistant.name().to_string(),
    })
}

/// The error preface followed by a plan for an empty day.
pub fn fallback_reply() -> String {
    let plan = format_plan(FALLBACK_PROMPT, &PlanContext::empty(today()));
    format!("{ERROR_PREFACE}\n\n{plan}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
