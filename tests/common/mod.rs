//! Shared test utilities

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use voicetask::api::{ApiServer, ApiState, ModelInfo};
use voicetask::{CommandRelay, CompletionApi, Error, Result, Synthesizer};

/// Scripted outcome for the fake completion upstream
pub enum ScriptedReply {
    /// Reply with this text
    Text(&'static str),
    /// Fail with `UpstreamTimeout`
    Timeout,
    /// Fail with `Upstream`
    Failure,
}

/// Completion upstream that replays a scripted outcome and counts calls
pub struct ScriptedCompletion {
    reply: ScriptedReply,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl CompletionApi for ScriptedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            ScriptedReply::Text(t) => Ok((*t).to_string()),
            ScriptedReply::Timeout => Err(Error::UpstreamTimeout),
            ScriptedReply::Failure => Err(Error::Upstream("completion API error 500".to_string())),
        }
    }
}

/// Synthesizer that returns four fixed bytes (`AQIDBA==` in base64), or
/// fails on demand
pub struct ScriptedSynthesizer {
    pub fail: bool,
}

#[async_trait]
impl Synthesizer for ScriptedSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>> {
        if self.fail {
            Err(Error::Tts("synthesis unavailable".to_string()))
        } else {
            Ok(vec![1, 2, 3, 4])
        }
    }
}

/// Build a test router over scripted upstreams, returning the completion
/// call counter alongside
pub fn build_router(
    reply: ScriptedReply,
    synthesizer: Option<Arc<dyn Synthesizer>>,
) -> (axum::Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let completion = Arc::new(ScriptedCompletion {
        reply,
        calls: calls.clone(),
    });
    let relay = CommandRelay::new(completion, synthesizer);
    let state = Arc::new(ApiState {
        relay,
        model_info: ModelInfo {
            model: "test-model".to_string(),
            configured: true,
        },
    });
    (ApiServer::router(state), calls)
}
