//! Instruction prompt construction for the completion upstream

use crate::tasks::Task;

/// Build the instruction prompt for one command.
///
/// Deterministic for a given command and snapshot: embeds the serialized
/// task list (zero-based, "No tasks yet" when empty) and pins the reply
/// contract to JSON-only output with the fixed action set.
#[must_use]
pub fn build_prompt(command: &str, tasks: &[Task]) -> String {
    let snapshot = if tasks.is_empty() {
        "No tasks yet".to_string()
    } else {
        serde_json::to_string(tasks).unwrap_or_else(|_| "[]".to_string())
    };

    format!(
        r#"You are a to-do assistant.
Current tasks (0-indexed): {snapshot}
User: "{command}"

Respond ONLY with valid JSON (no markdown, no code blocks):
{{
  "action": "add|delete|complete|clear|list|impossible|unknown",
  "taskText": "description",
  "taskIndex": 0,
  "feedback": "brief response",
  "suggestedTask": "feasible alternative (only with action impossible)"
}}

Rules:
- For ADD: check the task is physically possible. If not (e.g. "run 500 miles in 1 hour"), use action "impossible", explain why in feedback, and offer a feasible suggestedTask
- For DELETE/COMPLETE: extract the task number from the command ("task 1" = index 0, "first task" = index 0)
- For LIST: repeat the current tasks in feedback
- taskIndex is 0-based (first task = 0)
- Keep feedback under 15 words"#
    )
}
