//! edubuddy-lib — Relay server engine.
//!
//! Gemini chat client, Whisper transcription client, the ask flow with its
//! suggestion fallback, and the HTTP API. Depends on edubuddy-core for pure
//! types and conversation shaping.

pub mod composer;
pub mod error;
pub mod gemini;
pub mod provider;
pub mod server;
pub mod state;
pub mod stt;

#[cfg(test)]
mod fake_provider;

// Re-export edubuddy-core for convenience
pub use edubuddy_core;
