use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voicetask::api::{ApiServer, ModelInfo};
use voicetask::config::{self, Config, TtsConfig};
use voicetask::relay::gemini::GeminiClient;
use voicetask::{CommandRelay, Console, Synthesizer, TaskStore, TextToSpeech};

/// VoiceTask - voice-controlled to-do relay
#[derive(Parser)]
#[command(name = "voicetask", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "VOICETASK_PORT", default_value = "18790")]
    port: u16,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the command relay server (default)
    Serve,
    /// Interactive console client against a running relay
    Console {
        /// Relay base URL
        #[arg(long, env = "VOICETASK_RELAY_URL", default_value = "http://localhost:18790")]
        url: String,
    },
    /// Print the locally persisted task list
    Tasks,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,voicetask=info",
        1 => "info,voicetask=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None | Some(Command::Serve) => serve(cli.port).await,
        Some(Command::Console { url }) => console(&url).await,
        Some(Command::Tasks) => list_tasks(),
    }
}

/// Run the relay server
async fn serve(port: u16) -> anyhow::Result<()> {
    // Startup-fatal without a completion key
    let config = Config::from_env()?;

    let completion = Arc::new(GeminiClient::new(
        config.gemini.api_key.clone(),
        config.gemini.model.clone(),
        config.gemini.timeout,
    )?);

    let synthesizer = build_synthesizer(config.tts.as_ref())?;
    if synthesizer.is_some() {
        tracing::info!("speech synthesis enabled");
    } else {
        tracing::info!("speech synthesis disabled (no TTS key configured)");
    }

    let relay = CommandRelay::new(completion, synthesizer);
    let model_info = ModelInfo {
        model: config.gemini.model.clone(),
        configured: true,
    };

    tracing::info!(model = %config.gemini.model, port, "starting voicetask relay");
    ApiServer::new(relay, model_info, port).run().await?;

    Ok(())
}

fn build_synthesizer(tts: Option<&TtsConfig>) -> voicetask::Result<Option<Arc<dyn Synthesizer>>> {
    match tts {
        None => Ok(None),
        Some(TtsConfig::OpenAi {
            api_key,
            voice,
            model,
            speed,
        }) => Ok(Some(Arc::new(TextToSpeech::openai(
            api_key.clone(),
            voice.clone(),
            *speed,
            model.clone(),
        )?))),
        Some(TtsConfig::ElevenLabs {
            api_key,
            voice_id,
            model,
        }) => Ok(Some(Arc::new(TextToSpeech::elevenlabs(
            api_key.clone(),
            voice_id.clone(),
            model.clone(),
        )?))),
    }
}

/// Run the interactive console client
async fn console(url: &str) -> anyhow::Result<()> {
    let store = TaskStore::load(config::tasks_path());
    Console::new(url, store).run().await?;
    Ok(())
}

/// Print the locally persisted task list
fn list_tasks() -> anyhow::Result<()> {
    let store = TaskStore::load(config::tasks_path());

    if store.is_empty() {
        println!("No tasks yet.");
        return Ok(());
    }

    for (i, task) in store.tasks().iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        println!("{i:3}. [{mark}] {}", task.text);
    }

    Ok(())
}
