use clap::Parser;
use colored::*;
use std::io;
use std::process;

use gemini_flights::api::{GeminiClient, GenerationConfig};
use gemini_flights::app::APP_TITLE;
use gemini_flights::cli::Args;
use gemini_flights::config::{init_config_file, Config};
use gemini_flights::flights::FlightManager;
use gemini_flights::tools::flight_tools;
use gemini_flights::ui::{display_error, trace, TerminalTranscript};
use gemini_flights::{App, ChatSession, Conversation, Result};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.config_init {
        match init_config_file(None) {
            Ok(path) => {
                println!("{}", format!("Wrote example config to {}", path.display()).green());
                return;
            }
            Err(e) => {
                display_error(e.to_string());
                process::exit(1);
            }
        }
    }

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            display_error(e.to_string());
            process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        display_error(e.to_string());
        process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    trace(config.verbose, format!("Using model: {}", config.model));
    trace(config.verbose, format!("Endpoint: {}", config.api_endpoint));
    trace(
        config.verbose,
        format!("Temperature: {}, reference year: {}", config.temperature, config.reference_year),
    );

    let client = GeminiClient::new(&config)?;
    let generation_config = GenerationConfig {
        temperature: Some(config.temperature),
    };
    let session = ChatSession::new(client, vec![flight_tools()], Some(generation_config))
        .with_verbose(config.verbose);

    let mut app = App::new(
        Conversation::new(session),
        FlightManager::with_sample_inventory(),
        config.reference_year,
    );
    let mut transcript = TerminalTranscript::new(APP_TITLE, config.clear_screen);

    let stdin = io::stdin();
    app.run(&mut transcript, stdin.lock()).await
}
