use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use clicrew::{Config, ConfigError};

mod commands;

#[derive(Parser)]
#[command(
    name = "clicrew",
    about = "A single-agent CLI crew wiring a Gemini LLM to a shell command executor",
    version
)]
struct Cli {
    /// Path to a TOML config overlay (default: ./clicrew.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the default crew: identify the OS and empty the recycle bin
    Run,
    /// Dispatch a single command through the executor tool
    Exec {
        /// The command to execute (natural language or literal shell)
        command: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // The credential gate runs before any dispatcher exists, so a missing
    // key causes zero side effects.
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(ConfigError::MissingCredential) => {
            eprintln!("Error: GOOGLE_API_KEY environment variable is not set.");
            eprintln!("Please set your Google API key:");
            eprintln!("export GOOGLE_API_KEY='your-api-key-here'");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        None | Some(Commands::Run) => commands::run::run(&config),
        Some(Commands::Exec { command }) => commands::exec::run(&config, &command),
    };

    if let Err(e) = result {
        eprintln!("Error running crew: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
