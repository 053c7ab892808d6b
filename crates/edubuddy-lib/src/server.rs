//! HTTP API for the edubuddy relay.
//!
//! Runs on port 5000 by default. CORS-permissive so the web client can be
//! served from anywhere during development.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use edubuddy_core::audio::decode_data_url;
use edubuddy_core::conversation::Reply;
use edubuddy_core::persona::Persona;
use edubuddy_core::types::{ApiStatus, AskRequest, ServerConfig, WhisperRequest, WhisperResponse};

use crate::error::ApiError;
use crate::provider::ProviderError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Build the axum router over a shared [`AppState`].
///
/// `config` supplies the body limit and the optional static directory.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .route("/whisper", post(whisper))
        .route("/api_status", get(api_status));

    if let Some(dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to build provider clients: {0}")]
    Provider(#[from] ProviderError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Build providers from `config`, bind, and serve until the process exits.
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let state = AppState::from_config(&config)?;
    let app = router(state, &config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("edubuddy listening on {addr}");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}

// ─── Handlers ──────────────────────────────────────────────────────────────

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ask(
    State(state): State<AppState>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<Reply>, ApiError> {
    let Json(req) = body?;
    debug!(
        persona = req.persona.as_deref().unwrap_or("-"),
        history = req.history.len(),
        "/ask received"
    );

    if req.message.is_empty() {
        return Err(ApiError::Validation(
            "Please provide a message to continue the conversation.",
        ));
    }

    let Some(composer) = state.composer() else {
        return Err(ApiError::Configuration(
            "The Google Gemini API key is not configured. Please contact the administrator.",
        ));
    };

    let persona = req
        .persona
        .as_deref()
        .map(Persona::from_key)
        .unwrap_or_default();

    composer
        .ask(&req.message, persona, &req.history)
        .await
        .map(Json)
        .map_err(|e| {
            error!("/ask: generation failed: {e}");
            ApiError::Provider("Oops! Something went wrong. Please try again.")
        })
}

async fn whisper(
    State(state): State<AppState>,
    body: Result<Json<WhisperRequest>, JsonRejection>,
) -> Result<Json<WhisperResponse>, ApiError> {
    let Json(req) = body?;

    let Some(audio) = req.audio.filter(|a| !a.trim().is_empty()) else {
        return Err(ApiError::Validation(
            "No audio data received. Please try again.",
        ));
    };

    let Some(transcriber) = state.transcriber() else {
        return Err(ApiError::Configuration(
            "The OpenAI API key for voice-to-text is not configured. Please contact the administrator.",
        ));
    };

    let clip = decode_data_url(&audio).map_err(|e| {
        debug!("/whisper: {e}");
        ApiError::Validation("The audio data could not be decoded. Please record again.")
    })?;

    let transcription = transcriber.transcribe(&clip).await.map_err(|e| {
        error!("/whisper: transcription failed: {e}");
        ApiError::Provider("Failed to transcribe audio. Please try again.")
    })?;

    Ok(Json(WhisperResponse { transcription }))
}

async fn api_status(State(state): State<AppState>) -> Json<ApiStatus> {
    Json(state.status())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {detail}");
    ApiError::Internal("Oops! Something went wrong. Please try again.").into_response()
}
