use clap::{Parser, Subcommand};
use numfind::api::{ErrorResponse, LocateResponse};
use numfind_core::config::Config;
use numfind_core::{LocateError, LocateRequest};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "numfind", about = "Locate numbers in monotonic sequences")]
struct Cli {
    /// TOML config file. Defaults to ./numfind.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (the default).
    Serve {
        /// Listen on this port instead of the configured one.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Look up one number, print the JSON result and exit.
    ///
    /// Exit status: 0 matched, 1 not found, 2 invalid input, 3 sequence error.
    Locate {
        #[arg(allow_hyphen_values = true)]
        number: String,
        /// Accept an approximate match within this fraction of the number.
        #[arg(long)]
        threshold: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Variables already set in the environment win over `.env`.
    let dotenv = dotenvy::dotenv();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
        config.validate()?;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    let locator = numfind::build_locator(&config)?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            numfind::server::run(&config.server, locator).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Locate { number, threshold } => {
            let outcome = LocateRequest::parse(&number, threshold.as_deref())
                .map_err(LocateError::from)
                .and_then(|request| locator.locate_request(&request));

            match outcome {
                Ok(found) => {
                    println!("{}", serde_json::to_string(&LocateResponse::from(found))?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    if !e.is_client_error() {
                        tracing::error!(error = %e, "sequence source failed during lookup");
                    }
                    let code = exit_code(&e);
                    let body = ErrorResponse {
                        error: e.to_string(),
                    };
                    println!("{}", serde_json::to_string(&body)?);
                    Ok(ExitCode::from(code))
                }
            }
        }
    }
}

/// Exit status for a failed `locate`.
fn exit_code(error: &LocateError) -> u8 {
    match error {
        LocateError::NotFound(_) => 1,
        LocateError::InvalidInput(_) => 2,
        LocateError::InvalidSequence { .. } => 3,
    }
}
