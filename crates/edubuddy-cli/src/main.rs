//! edubuddy CLI — relay server and command-line client.
//!
//! ```text
//! edubuddy serve [--port 5000] [--host 0.0.0.0] [--static-dir ./static]
//! edubuddy ask "what is entropy?" [--persona stem] [--server http://localhost:5000]
//! edubuddy transcribe recording.webm [--server ...]
//! edubuddy status [--server ...]
//! ```
//!
//! Credentials come from `GOOGLE_API_KEY` and `OPENAI_API_KEY`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::{Parser, Subcommand};
use tracing::error;

use edubuddy_lib::edubuddy_core::audio::{DEFAULT_MIME, mime_for_extension};
use edubuddy_lib::edubuddy_core::types::{
    DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL, DEFAULT_WHISPER_MODEL, DEFAULT_WHISPER_URL,
    ServerConfig,
};

const DEFAULT_SERVER: &str = "http://localhost:5000";

/// edubuddy — study-buddy relay for Gemini chat and Whisper transcription
#[derive(Parser)]
#[command(name = "edubuddy", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the relay server
    Serve(ServeArgs),
    /// Ask the running server a question
    Ask {
        /// Question text
        message: String,
        /// Persona key: stem, coding, business, general, language
        #[arg(long, default_value = "general")]
        persona: String,
        /// Server URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Transcribe an audio file through the running server
    Transcribe {
        /// Audio file (webm, wav, ogg, mp3, m4a, flac)
        file: PathBuf,
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Show which providers the running server has credentials for
    Status {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[derive(clap::Args)]
struct ServeArgs {
    /// Listen host
    #[arg(long, env = "EDUBUDDY_HOST", default_value = "0.0.0.0")]
    host: String,
    /// Listen port
    #[arg(long, env = "EDUBUDDY_PORT", default_value = "5000")]
    port: u16,
    /// Google Gemini API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    google_api_key: Option<String>,
    /// OpenAI API key (Whisper)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,
    /// Gemini model name
    #[arg(long, env = "EDUBUDDY_GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    gemini_model: String,
    /// Gemini models endpoint
    #[arg(long, env = "EDUBUDDY_GEMINI_URL", default_value = DEFAULT_GEMINI_URL)]
    gemini_url: String,
    /// Whisper transcription endpoint
    #[arg(long, env = "EDUBUDDY_WHISPER_URL", default_value = DEFAULT_WHISPER_URL)]
    whisper_url: String,
    /// Whisper model name
    #[arg(long, env = "EDUBUDDY_WHISPER_MODEL", default_value = DEFAULT_WHISPER_MODEL)]
    whisper_model: String,
    /// Outbound request timeout in seconds
    #[arg(long, env = "EDUBUDDY_TIMEOUT_SECS", default_value = "120")]
    timeout_secs: u64,
    /// Directory served under /static
    #[arg(long, env = "EDUBUDDY_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            gemini_model: self.gemini_model,
            gemini_url: self.gemini_url,
            whisper_url: self.whisper_url,
            whisper_model: self.whisper_model,
            request_timeout_secs: self.timeout_secs,
            static_dir: self.static_dir,
            ..Default::default()
        }
        .with_credentials(self.google_api_key, self.openai_api_key)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edubuddy=info,edubuddy_lib=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Serve(args) => edubuddy_lib::server::serve(args.into_config())
            .await
            .map_err(|e| e.to_string()),

        Command::Ask {
            message,
            persona,
            server,
        } => {
            let body = serde_json::json!({ "message": message, "persona": persona });
            post_json(&server, "ask", &body).await
        }

        Command::Transcribe { file, server } => match audio_data_url(&file) {
            Ok(audio) => post_json(&server, "whisper", &serde_json::json!({ "audio": audio })).await,
            Err(e) => Err(e),
        },

        Command::Status { server } => get(&server, "api_status").await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn post_json(server: &str, endpoint: &str, body: &serde_json::Value) -> Result<(), String> {
    let resp = reqwest::Client::new()
        .post(format!("{server}/{endpoint}"))
        .json(body)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;
    print_response(resp).await
}

async fn get(server: &str, endpoint: &str) -> Result<(), String> {
    let resp = reqwest::Client::new()
        .get(format!("{server}/{endpoint}"))
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;
    print_response(resp).await
}

async fn print_response(resp: reqwest::Response) -> Result<(), String> {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    println!("{text}");
    if status.is_success() {
        Ok(())
    } else {
        Err(format!("server returned {status}"))
    }
}

/// Read `path` and wrap it in the data URL shape a browser recorder produces.
fn audio_data_url(path: &Path) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let mime = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(DEFAULT_MIME, mime_for_extension);
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
