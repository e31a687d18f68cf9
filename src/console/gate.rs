//! Single-slot in-flight guard for the command pipeline

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Two-state machine (`Idle` / `Processing`) guarding the relay call site.
///
/// At most one command may be in flight per session. [`CommandGate::try_begin`]
/// while Processing returns `None`, and the caller drops the new command
/// instead of queueing it.
#[derive(Clone, Debug, Default)]
pub struct CommandGate {
    processing: Arc<AtomicBool>,
}

impl CommandGate {
    /// Create a gate in the Idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move Idle → Processing. Returns `None` when already Processing.
    #[must_use]
    pub fn try_begin(&self) -> Option<Permit> {
        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(Permit {
                gate: Arc::clone(&self.processing),
            })
        } else {
            None
        }
    }

    /// Whether a command is currently in flight
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }
}

/// Held for the duration of one command; returns the gate to Idle on drop
#[derive(Debug)]
pub struct Permit {
    gate: Arc<AtomicBool>,
}

impl Drop for Permit {
    fn drop(&mut self) {
        self.gate.store(false, Ordering::Release);
    }
}
