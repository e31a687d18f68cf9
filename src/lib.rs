//! VoiceTask - voice-controlled to-do list gateway
//!
//! This library provides the pieces behind a voice-driven task list:
//! - Command relay: interprets a transcript against a task snapshot via an
//!   external completion API, with defensive parsing of the reply
//! - Spoken feedback: optional TTS rendering of the relay's feedback
//! - Task store: ordered, locally persisted task list mutated only by
//!   validated command results
//! - Console client: a line-oriented stand-in for the browser UI
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              UI / Console client                 │
//! │   speech capture │ task store │ in-flight gate   │
//! └───────────────────────┬──────────────────────────┘
//!                         │ POST /api/command
//! ┌───────────────────────▼──────────────────────────┐
//! │               Command relay (stateless)          │
//! │   prompt build │ defensive parse │ feedback TTS  │
//! └───────────────────────┬──────────────────────────┘
//!                         │
//! ┌───────────────────────▼──────────────────────────┐
//! │         Upstreams: completion API │ TTS API      │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod relay;
pub mod tasks;
pub mod voice;

pub use command::{Action, CommandResult};
pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use relay::{CommandRelay, CompletionApi};
pub use tasks::{Mutation, Task, TaskStore};
pub use voice::{Synthesizer, TextToSpeech};
