//! Speech-to-text — multipart upload to an OpenAI-compatible Whisper endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use edubuddy_core::audio::AudioClip;

use crate::provider::{ProviderError, Transcriber};

/// Transcriber backed by `/v1/audio/transcriptions`.
#[derive(Clone)]
pub struct WhisperClient {
    client: Client,
    api_key: String,
    url: String,
    model: String,
}

impl WhisperClient {
    pub fn new(
        api_key: impl Into<String>,
        url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            url: url.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl Transcriber for WhisperClient {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, ProviderError> {
        debug!(bytes = clip.bytes.len(), mime = %clip.mime_type, "whisper: uploading clip");

        let part = reqwest::multipart::Part::bytes(clip.bytes.clone())
            .file_name(clip.file_name())
            .mime_str(&clip.mime_type)?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        transcript_text(&body)
    }
}

/// Pull `text` out of the JSON response. A response without it is an empty transcript.
fn transcript_text(body: &str) -> Result<String, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {e}")))?;
    Ok(value
        .get("text")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string())
}
