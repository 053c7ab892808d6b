//! Application state shared by the route handlers.
//!
//! Built once at startup from [`ServerConfig`]; a provider is present only if
//! its credential was. Nothing here is mutated after construction.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use edubuddy_core::types::{ApiStatus, ServerConfig};

use crate::composer::Composer;
use crate::gemini::GeminiClient;
use crate::provider::{ChatModel, ProviderError, Transcriber};
use crate::stt::WhisperClient;

#[derive(Clone)]
pub struct AppState {
    composer: Option<Composer>,
    transcriber: Option<Arc<dyn Transcriber>>,
}

impl AppState {
    /// Assemble state from already-built providers. `None` means "not configured".
    pub fn new(
        chat: Option<Arc<dyn ChatModel>>,
        transcriber: Option<Arc<dyn Transcriber>>,
    ) -> Self {
        Self {
            composer: chat.map(Composer::new),
            transcriber,
        }
    }

    /// Build the real Gemini and Whisper clients for whichever credentials are set.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ProviderError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let chat: Option<Arc<dyn ChatModel>> = match &config.gemini_api_key {
            Some(key) => {
                info!(model = %config.gemini_model, "Google API key found and configured");
                let client: Arc<dyn ChatModel> = Arc::new(GeminiClient::new(
                    key.as_str(),
                    config.gemini_model.as_str(),
                    config.gemini_url.as_str(),
                    timeout,
                )?);
                Some(client)
            }
            None => {
                warn!("no Google API key found; /ask will be unavailable");
                None
            }
        };

        let transcriber: Option<Arc<dyn Transcriber>> = match &config.openai_api_key {
            Some(key) => {
                info!(model = %config.whisper_model, "OpenAI API key found and configured");
                let client: Arc<dyn Transcriber> = Arc::new(WhisperClient::new(
                    key.as_str(),
                    config.whisper_url.as_str(),
                    config.whisper_model.as_str(),
                    timeout,
                )?);
                Some(client)
            }
            None => {
                warn!("no OpenAI API key found; /whisper will be unavailable");
                None
            }
        };

        Ok(Self::new(chat, transcriber))
    }

    pub fn composer(&self) -> Option<&Composer> {
        self.composer.as_ref()
    }

    pub fn transcriber(&self) -> Option<&Arc<dyn Transcriber>> {
        self.transcriber.as_ref()
    }

    pub fn status(&self) -> ApiStatus {
        ApiStatus {
            gemini_configured: self.composer.is_some(),
            whisper_configured: self.transcriber.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_credentials() {
        let config = ServerConfig::default().with_credentials(Some("g".into()), None);
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(
            state.status(),
            ApiStatus {
                gemini_configured: true,
                whisper_configured: false,
            }
        );

        let config = ServerConfig::default().with_credentials(None, Some("o".into()));
        let state = AppState::from_config(&config).unwrap();
        assert!(state.composer().is_none());
        assert!(state.transcriber().is_some());
    }

    #[test]
    fn no_credentials_no_providers() {
        let state = AppState::from_config(&ServerConfig::default()).unwrap();
        assert_eq!(
            state.status(),
            ApiStatus {
                gemini_configured: false,
                whisper_configured: false,
            }
        );
    }
}
