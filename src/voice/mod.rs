//! Spoken feedback synthesis
//!
//! Speech capture stays in the UI; this module only renders feedback audio
//! through an external synthesis upstream.

pub mod tts;

use async_trait::async_trait;

use crate::Result;

pub use tts::TextToSpeech;

/// Speech-synthesis upstream seam
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Render text as MP3 audio bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}
