//! Command relay: free-text voice command → validated [`CommandResult`]
//!
//! The relay is stateless across requests. Hard upstream failures (timeout,
//! non-success response) propagate to the caller; everything wrong with the
//! reply *content* degrades to an `unknown` result, so callers always
//! receive a well-formed outcome.

pub mod gemini;
pub mod parse;
pub mod prompt;

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;

use crate::command::CommandResult;
use crate::tasks::Task;
use crate::voice::Synthesizer;
use crate::Result;

/// Default acknowledgement when the model omits feedback
const DEFAULT_FEEDBACK: &str = "Done.";

/// Apology used whenever the model reply cannot be parsed
const APOLOGY_FEEDBACK: &str = "I couldn't understand that command.";

/// Feedback longer than this is not synthesized
const MAX_SPOKEN_CHARS: usize = 500;

/// Text-completion upstream seam
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Send one prompt, return the raw reply text
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Translates voice commands into validated task actions
pub struct CommandRelay {
    completion: Arc<dyn CompletionApi>,
    synthesizer: Option<Arc<dyn Synthesizer>>,
}

impl CommandRelay {
    /// Create a relay over a completion upstream and an optional synthesizer
    #[must_use]
    pub fn new(
        completion: Arc<dyn CompletionApi>,
        synthesizer: Option<Arc<dyn Synthesizer>>,
    ) -> Self {
        Self {
            completion,
            synthesizer,
        }
    }

    /// Whether spoken feedback can be produced
    #[must_use]
    pub fn speech_enabled(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Interpret one command against a task snapshot.
    ///
    /// The returned result always carries an action from the fixed set and
    /// non-empty feedback: an unparsable reply becomes `unknown` with an
    /// apology rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::UpstreamTimeout` or `Error::Upstream` for hard
    /// completion failures. No task mutation can result from either.
    pub async fn interpret(&self, command: &str, tasks: &[Task]) -> Result<CommandResult> {
        let prompt = prompt::build_prompt(command, tasks);
        let raw = self.completion.complete(&prompt).await?;

        let mut result = match parse::extract_command_result(&raw) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, raw = %raw, "unparsable model reply");
                return Ok(CommandResult::unknown(APOLOGY_FEEDBACK));
            }
        };

        if result.feedback.trim().is_empty() {
            result.feedback = DEFAULT_FEEDBACK.to_string();
        }

        tracing::info!(action = ?result.action, feedback = %result.feedback, "command interpreted");
        Ok(result)
    }

    /// Render feedback as speech, returned as base64 MP3.
    ///
    /// An absent synthesizer, empty or over-long feedback, and a failed
    /// synthesis call all yield `None`; speech never fails a request.
    pub async fn speak(&self, feedback: &str) -> Option<String> {
        let synthesizer = self.synthesizer.as_ref()?;

        if feedback.is_empty() || feedback.len() > MAX_SPOKEN_CHARS {
            return None;
        }

        match synthesizer.synthesize(feedback).await {
            Ok(audio) => Some(base64::engine::general_purpose::STANDARD.encode(audio)),
            Err(e) => {
                tracing::warn!(error = %e, "speech synthesis failed");
                None
            }
        }
    }
}
