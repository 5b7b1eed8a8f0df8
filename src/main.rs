use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use ts_assistant::app::headless::{self, HeadlessOptions};
use ts_assistant::app::run_tui;
use ts_assistant::config::Settings;
use ts_assistant::llm::Model;
use ts_assistant::logging;
use ts_assistant::ui::{App, SAMPLE_CODE};

#[derive(Parser, Debug)]
#[command(
    name = "tsassist",
    about = "Review TypeScript snippets for modern patterns, type safety and performance",
    version
)]
struct Args {
    /// File to load into the editor (with --print, the file to analyze; "-" reads stdin)
    file: Option<PathBuf>,

    /// Model to ask (gpt-4, gpt-4-turbo, gpt-3.5-turbo)
    #[arg(short, long)]
    model: Option<Model>,

    /// Cap on generated tokens
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long)]
    temperature: Option<f64>,

    /// Analyze once, print the report and exit (no TUI)
    #[arg(short, long)]
    print: bool,

    /// Print the raw result as JSON
    #[arg(long, requires = "print")]
    json: bool,

    /// Use the live API instead of demo mode (prompts for the key)
    #[arg(long, requires = "print")]
    live: bool,
}

impl Args {
    /// Layer CLI overrides on top of the settings file
    fn apply(&self, settings: &mut Settings) -> Result<()> {
        if let Some(model) = self.model {
            settings.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            settings.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            settings.temperature = temperature;
        }
        settings.validate().map_err(anyhow::Error::msg)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("  Warning: file logging disabled: {}", e);
    }

    let mut settings = Settings::load();
    args.apply(&mut settings)?;
    tracing::debug!(?settings, config = %Settings::config_location(), "settings loaded");

    if args.print {
        let options = HeadlessOptions {
            input: args.file.clone(),
            json: args.json,
            live: args.live,
        };
        if !headless::run_headless(&settings, &options).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    let code = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => SAMPLE_CODE.to_string(),
    };

    run_tui(App::with_code(settings, &code)).await
}
