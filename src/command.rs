//! Command interpretation wire types
//!
//! A [`CommandResult`] is the validated, safe-to-apply outcome of one voice
//! command. It is produced per request and never persisted.

use serde::{Deserialize, Serialize};

/// Action requested by an interpreted command
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Append a new task
    Add,
    /// Remove the task at `taskIndex`
    Delete,
    /// Toggle completion of the task at `taskIndex`
    Complete,
    /// Remove all tasks
    Clear,
    /// Read the list back; no mutation
    List,
    /// Requested task judged infeasible; no mutation
    Impossible,
    /// Command not understood; no mutation
    #[default]
    Unknown,
}

/// Structured outcome of interpreting one voice command
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommandResult {
    /// What the command asked for
    pub action: Action,

    /// Description to add (meaningful for `add` only)
    #[serde(default, rename = "taskText", skip_serializing_if = "Option::is_none")]
    pub task_text: Option<String>,

    /// Zero-based position (meaningful for `delete`/`complete`).
    ///
    /// Signed on the wire: a model emitting `-1` must still parse and then
    /// fail the bounds check, rather than failing the whole request.
    #[serde(default, rename = "taskIndex", skip_serializing_if = "Option::is_none")]
    pub task_index: Option<i64>,

    /// Short natural-language response for display/speech
    #[serde(default)]
    pub feedback: String,

    /// Alternative suggestion when the request was judged infeasible.
    /// Surfaced as feedback only, never applied to the list.
    #[serde(default, rename = "suggestedTask", skip_serializing_if = "Option::is_none")]
    pub suggested_task: Option<String>,
}

impl CommandResult {
    /// Fallback result used whenever the model reply cannot be trusted
    #[must_use]
    pub fn unknown(feedback: impl Into<String>) -> Self {
        Self {
            action: Action::Unknown,
            task_text: None,
            task_index: None,
            feedback: feedback.into(),
            suggested_task: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Action::Add).unwrap(), "\"add\"");
        assert_eq!(serde_json::to_string(&Action::Unknown).unwrap(), "\"unknown\"");
        let action: Action = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(action, Action::Complete);
    }

    #[test]
    fn unrecognized_action_fails_to_parse() {
        assert!(serde_json::from_str::<Action>("\"remove\"").is_err());
    }

    #[test]
    fn result_serializes_camel_case_and_skips_absent_fields() {
        let result = CommandResult {
            action: Action::Delete,
            task_text: None,
            task_index: Some(2),
            feedback: "Deleted task 3.".to_string(),
            suggested_task: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["action"], "delete");
        assert_eq!(json["taskIndex"], 2);
        assert_eq!(json["feedback"], "Deleted task 3.");
        assert!(json.get("taskText").is_none());
        assert!(json.get("suggestedTask").is_none());
    }

    #[test]
    fn negative_index_still_parses() {
        let result: CommandResult =
            serde_json::from_str(r#"{"action":"delete","taskIndex":-1}"#).unwrap();
        assert_eq!(result.task_index, Some(-1));
        assert!(result.feedback.is_empty());
    }
}
