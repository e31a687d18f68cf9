//! Line-oriented local client
//!
//! Plays the UI's role for development and testing: reads one transcript
//! per line from stdin, relays it, and applies the validated result to the
//! locally persisted task list. While a command is in flight, further
//! input is dropped (never queued) so the relayed snapshot can't go stale
//! mid-request.

pub mod gate;

use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::api::command::{CommandRequest, CommandResponse};
use crate::tasks::{Mutation, TaskStore};
use crate::Result;

use gate::{CommandGate, Permit};

/// Interactive relay client over a local task store
pub struct Console {
    relay_url: String,
    client: Client,
    store: TaskStore,
    gate: CommandGate,
}

impl Console {
    /// Create a console against a relay base URL
    #[must_use]
    pub fn new(relay_url: &str, store: TaskStore) -> Self {
        Self {
            relay_url: relay_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            store,
            gate: CommandGate::new(),
        }
    }

    /// Run the read/relay/apply loop until stdin closes
    ///
    /// # Errors
    ///
    /// Returns error if stdin cannot be read
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let (tx, mut rx) = mpsc::channel::<(Permit, Result<CommandResponse>)>(1);

        println!("Relay: {}", self.relay_url);
        println!("Type a command (e.g. \"add buy milk\"), Ctrl-D to quit.");
        self.print_tasks();

        loop {
            tokio::select! {
                maybe_line = lines.next_line() => {
                    match maybe_line? {
                        None => break,
                        Some(line) => self.dispatch(line.trim(), &tx),
                    }
                }
                Some((permit, outcome)) = rx.recv() => {
                    self.finish(outcome);
                    drop(permit);
                }
            }
        }

        // Let an in-flight command settle before exiting
        if self.gate.is_processing() {
            if let Some((permit, outcome)) = rx.recv().await {
                self.finish(outcome);
                drop(permit);
            }
        }

        Ok(())
    }

    /// Send one command, unless another is already in flight
    fn dispatch(&self, command: &str, tx: &mpsc::Sender<(Permit, Result<CommandResponse>)>) {
        if command.is_empty() {
            return;
        }

        let Some(permit) = self.gate.try_begin() else {
            println!("(still processing the previous command, \"{command}\" dropped)");
            return;
        };

        let request = CommandRequest {
            command: command.to_string(),
            tasks: self.store.tasks().to_vec(),
        };
        let client = self.client.clone();
        let url = format!("{}/api/command", self.relay_url);
        let tx = tx.clone();

        tokio::spawn(async move {
            let outcome = send_command(&client, &url, &request).await;
            // The permit rides along so the gate stays Processing until
            // the result has been applied
            let _ = tx.send((permit, outcome)).await;
        });
    }

    /// Surface the outcome and apply any mutation to the local store
    fn finish(&mut self, outcome: Result<CommandResponse>) {
        match outcome {
            Ok(response) => {
                println!("» {}", response.result.feedback);
                if let Some(audio) = &response.audio {
                    println!("  (spoken feedback attached, {} base64 chars)", audio.len());
                }
                if self.store.apply(&response.result) != Mutation::None {
                    self.print_tasks();
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "relay request failed");
                println!("Backend error. Try again.");
            }
        }
    }

    fn print_tasks(&self) {
        if self.store.is_empty() {
            println!("No tasks yet.");
            return;
        }
        for (i, task) in self.store.tasks().iter().enumerate() {
            let mark = if task.completed { "x" } else { " " };
            println!("  {i}. [{mark}] {}", task.text);
        }
    }
}

async fn send_command(
    client: &Client,
    url: &str,
    request: &CommandRequest,
) -> Result<CommandResponse> {
    // Non-2xx replies still carry a well-formed result envelope, so the
    // status code is not inspected here
    let response = client.post(url).json(request).send().await?;
    Ok(response.json::<CommandResponse>().await?)
}
