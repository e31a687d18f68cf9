//! Configuration management for the VoiceTask gateway
//!
//! Everything is read once at startup from the environment and handed to
//! constructors explicitly, so tests can build their own.

use std::path::PathBuf;
use std::time::Duration;

use crate::{Error, Result};

/// Default completion model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default bound on one completion call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Gateway configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Completion upstream settings
    pub gemini: GeminiConfig,

    /// Speech-synthesis settings; `None` disables audio feedback
    pub tts: Option<TtsConfig>,
}

/// Completion upstream settings
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key (`GEMINI_API_KEY`)
    pub api_key: String,

    /// Model identifier (`GEMINI_MODEL`)
    pub model: String,

    /// Bound on one completion call (`VOICETASK_TIMEOUT_SECS`)
    pub timeout: Duration,
}

/// Speech-synthesis provider credentials
#[derive(Clone, Debug)]
pub enum TtsConfig {
    /// `OpenAI` speech API
    OpenAi {
        api_key: String,
        voice: String,
        model: String,
        speed: f32,
    },
    /// `ElevenLabs` speech API
    ElevenLabs {
        api_key: String,
        voice_id: String,
        model: String,
    },
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when `GEMINI_API_KEY` is absent or empty;
    /// the relay cannot start without its completion upstream.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("missing GEMINI_API_KEY in environment".to_string()))?;

        let timeout_secs = std::env::var("VOICETASK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            gemini: GeminiConfig {
                api_key,
                model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
                timeout: Duration::from_secs(timeout_secs),
            },
            tts: tts_from_env(),
        })
    }
}

/// TTS credentials: `OpenAI` first, then `ElevenLabs`, else disabled
fn tts_from_env() -> Option<TtsConfig> {
    if let Some(key) = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()) {
        return Some(TtsConfig::OpenAi {
            api_key: key,
            voice: env_or("VOICETASK_TTS_VOICE", "alloy"),
            model: env_or("VOICETASK_TTS_MODEL", "tts-1"),
            speed: std::env::var("VOICETASK_TTS_SPEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
        });
    }

    if let Some(key) = std::env::var("ELEVENLABS_API_KEY").ok().filter(|k| !k.is_empty()) {
        return Some(TtsConfig::ElevenLabs {
            api_key: key,
            voice_id: env_or("VOICETASK_TTS_VOICE", "21m00Tcm4TlvDq8ikWAM"),
            model: env_or("VOICETASK_TTS_MODEL", "eleven_monolingual_v1"),
        });
    }

    None
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Resolve the data directory: `VOICETASK_DATA_DIR` override, else the
/// platform data dir (`~/.local/share/voicetask` on Linux)
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var("VOICETASK_DATA_DIR").map_or_else(
        |_| {
            directories::BaseDirs::new()
                .map_or_else(|| PathBuf::from("."), |d| d.data_dir().join("voicetask"))
        },
        PathBuf::from,
    )
}

/// Path of the persisted task list
#[must_use]
pub fn tasks_path() -> PathBuf {
    data_dir().join("tasks.json")
}
