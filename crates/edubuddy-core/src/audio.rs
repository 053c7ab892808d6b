//! Browser audio payloads — base64 data URLs from `MediaRecorder`.
//!
//! Accepts `data:audio/webm;codecs=opus;base64,<payload>` as produced by
//! `FileReader.readAsDataURL`, and bare base64 (treated as webm).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use std::sync::LazyLock;

/// MIME type assumed when the payload carries none.
pub const DEFAULT_MIME: &str = "audio/webm";

// data:[<mime>][;param]*;base64
static RE_DATA_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(?P<mime>[A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+)?(?:;[^;,]*)*?;base64$").unwrap()
});

#[derive(Debug, thiserror::Error)]
pub enum AudioDecodeError {
    #[error("audio payload is empty")]
    Empty,
    #[error("data URL is not base64-encoded")]
    NotBase64Url,
    #[error("invalid base64 audio: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Decoded audio ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl AudioClip {
    /// Upload filename; the transcription API infers the container from the extension.
    pub fn file_name(&self) -> String {
        format!("audio.{}", extension_for(&self.mime_type))
    }
}

/// Decode a data URL (or bare base64) into raw audio bytes.
pub fn decode_data_url(input: &str) -> Result<AudioClip, AudioDecodeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AudioDecodeError::Empty);
    }

    let (mime_type, payload) = match input.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => {
            let caps = RE_DATA_HEADER
                .captures(header)
                .ok_or(AudioDecodeError::NotBase64Url)?;
            let mime = caps
                .name("mime")
                .map(|m| m.as_str().to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_MIME.to_string());
            (mime, payload)
        }
        Some(_) => return Err(AudioDecodeError::NotBase64Url),
        None => (DEFAULT_MIME.to_string(), input),
    };

    let bytes = STANDARD.decode(payload.trim())?;
    if bytes.is_empty() {
        return Err(AudioDecodeError::Empty);
    }

    Ok(AudioClip { mime_type, bytes })
}

/// File extension for a recorded-audio MIME type. Unknown types upload as webm.
pub fn extension_for(mime: &str) -> &'static str {
    match mime {
        "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
        "audio/ogg" | "application/ogg" => "ogg",
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => "m4a",
        "audio/flac" | "audio/x-flac" => "flac",
        _ => "webm",
    }
}

/// Canonical MIME type for a file extension; the inverse of [`extension_for`].
///
/// Matching is case-insensitive. Unknown extensions fall back to [`DEFAULT_MIME`].
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        _ => DEFAULT_MIME,
    }
}
