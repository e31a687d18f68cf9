//! Defensive JSON extraction from free-form model replies
//!
//! The completion upstream is untrusted-format: it may wrap the JSON in
//! markdown fences, prefix it with prose, or return garbage. Extraction is
//! a pure function; the caller decides what a failure degrades to.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::command::CommandResult;

/// Matches the widest `{...}` block in a reply
static JSON_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Why a model reply could not be turned into a [`CommandResult`]
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Reply contained no `{...}` block at all
    #[error("no JSON object in model reply")]
    NoJsonObject,

    /// A block was found but is not valid JSON of the expected shape
    /// (including a missing or unrecognized `action` field)
    #[error("malformed command JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Extract and validate the command object embedded in a model reply.
///
/// Strips markdown code fences, locates the outermost `{...}` block, and
/// parses it. A missing or unrecognized `action` is a parse failure, never
/// a partial result.
///
/// # Errors
///
/// Returns [`ParseFailure`] when no object can be located or parsing fails.
pub fn extract_command_result(raw: &str) -> Result<CommandResult, ParseFailure> {
    let cleaned = raw.replace("```json", "").replace("```", "");

    let block = JSON_BLOCK_REGEX
        .find(cleaned.trim())
        .ok_or(ParseFailure::NoJsonObject)?;

    Ok(serde_json::from_str(block.as_str())?)
}
