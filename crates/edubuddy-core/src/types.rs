//! Shared types for the edubuddy relay server.
//!
//! Request and response bodies live here so the CLI client and any other
//! consumer can speak the HTTP API without pulling in tokio or axum.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::conversation::Turn;

// ─── Configuration ─────────────────────────────────────────────────────────

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_WHISPER_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-1";

/// Server configuration. Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Gemini credential. `None` disables `/ask`.
    pub gemini_api_key: Option<String>,
    /// OpenAI credential. `None` disables `/whisper`.
    pub openai_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_url: String,
    pub whisper_url: String,
    pub whisper_model: String,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
    /// Served under `/static` when set.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            gemini_api_key: None,
            openai_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            gemini_url: DEFAULT_GEMINI_URL.into(),
            whisper_url: DEFAULT_WHISPER_URL.into(),
            whisper_model: DEFAULT_WHISPER_MODEL.into(),
            request_timeout_secs: 120,
            max_body_bytes: 32 * 1024 * 1024,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Replace credentials, treating empty or whitespace-only values as absent.
    pub fn with_credentials(mut self, gemini: Option<String>, openai: Option<String>) -> Self {
        self.gemini_api_key = non_empty(gemini);
        self.openai_api_key = non_empty(openai);
        self
    }

    pub fn gemini_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn whisper_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ─── /ask ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default)]
    pub history: Vec<Turn>,
}

// ─── /whisper ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhisperRequest {
    /// Base64 data URL of the recording.
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperResponse {
    pub transcription: String,
}

// ─── /api_status ───────────────────────────────────────────────────────────

/// Credential presence, not validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub gemini_configured: bool,
    pub whisper_configured: bool,
}
