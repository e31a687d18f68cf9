//! Task store persistence tests

use voicetask::{Action, CommandResult, Mutation, TaskStore};

fn add(text: &str) -> CommandResult {
    CommandResult {
        action: Action::Add,
        task_text: Some(text.to_string()),
        task_index: None,
        feedback: String::new(),
        suggested_task: None,
    }
}

fn indexed(action: Action, index: i64) -> CommandResult {
    CommandResult {
        action,
        task_text: None,
        task_index: Some(index),
        feedback: String::new(),
        suggested_task: None,
    }
}

#[test]
fn round_trip_reproduces_the_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::load(&path);
    store.apply(&add("buy milk"));
    store.apply(&add("water plants"));
    store.apply(&indexed(Action::Complete, 0));
    let before = store.tasks().to_vec();
    drop(store);

    let reloaded = TaskStore::load(&path);
    assert_eq!(reloaded.tasks(), before.as_slice());
    assert!(reloaded.tasks()[0].completed);
    assert!(!reloaded.tasks()[1].completed);
}

#[test]
fn persisted_format_uses_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::load(&path);
    store.apply(&add("buy milk"));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains("\"completed\""));
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::load(dir.path().join("nonexistent.json"));
    assert!(store.is_empty());
}

#[test]
fn corrupt_state_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "not json {{{").unwrap();

    let mut store = TaskStore::load(&path);
    assert!(store.is_empty());

    // The next mutation rewrites clean state
    store.apply(&add("fresh start"));
    drop(store);

    let reloaded = TaskStore::load(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "fresh start");
}

#[test]
fn stale_out_of_range_index_leaves_persisted_state_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::load(&path);
    store.apply(&add("only task"));

    // A result computed against a stale, longer snapshot
    assert_eq!(store.apply(&indexed(Action::Delete, 5)), Mutation::None);
    drop(store);

    let reloaded = TaskStore::load(&path);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "only task");
}

#[test]
fn clear_persists_the_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::load(&path);
    store.apply(&add("a"));
    store.apply(&add("b"));
    assert_eq!(store.apply(&indexed(Action::Clear, 0)), Mutation::Cleared);
    drop(store);

    let reloaded = TaskStore::load(&path);
    assert!(reloaded.is_empty());
}
