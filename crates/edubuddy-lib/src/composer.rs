//! Ask flow — persona-framed generation, then a follow-up suggestions pass.
//!
//! ```text
//! ask(message, persona, history)
//!     → compose() → ChatModel::generate   (failure → ProviderError)
//!     → suggestion_request(reply) → ChatModel::generate → parse_suggestions
//!                                   (any failure → FALLBACK_SUGGESTIONS)
//! ```
//!
//! Fallback policy: the suggestions pass can never fail a request whose
//! primary reply succeeded. Transport errors and unparseable output both
//! degrade to the fixed fallback list and are only logged.

use std::sync::Arc;

use tracing::{debug, error};

use edubuddy_core::conversation::{
    Reply, Turn, compose, fallback_suggestions, parse_suggestions, suggestion_request,
};
use edubuddy_core::persona::Persona;

use crate::provider::{ChatModel, ProviderError};

/// Cloneable handle over a shared [`ChatModel`].
#[derive(Clone)]
pub struct Composer {
    model: Arc<dyn ChatModel>,
}

impl Composer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Run both calls. Only the primary generation can fail.
    pub async fn ask(
        &self,
        message: &str,
        persona: Persona,
        history: &[Turn],
    ) -> Result<Reply, ProviderError> {
        let messages = compose(message, persona, history);
        debug!(%persona, turns = messages.len(), "composer: primary generation");

        let reply = self.model.generate(&messages).await?;
        let suggestions = self.suggestions(&reply).await;

        Ok(Reply {
            message: reply,
            suggestions,
        })
    }

    /// Follow-up questions for `reply`, or the fallback list.
    pub async fn suggestions(&self, reply: &str) -> Vec<String> {
        let raw = match self.model.generate(&suggestion_request(reply)).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("composer: suggestion generation failed: {e}");
                return fallback_suggestions();
            }
        };

        match parse_suggestions(&raw) {
            Ok(list) => list,
            Err(e) => {
                error!("composer: {e}");
                fallback_suggestions()
            }
        }
    }
}
