//! Provider seams — the chat model and the transcriber the server relays to.
//!
//! Handlers only see these traits, so tests swap in counting mocks.

use async_trait::async_trait;

use edubuddy_core::audio::AudioClip;
use edubuddy_core::conversation::Message;

/// Failure talking to an external provider. Never shown to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Turn-based generative chat model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Submit the message list and return the model's text verbatim.
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError>;
}

/// Speech-to-text model.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError>;
}
