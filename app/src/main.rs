//! eVoting sign-in - application entry point.

use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_lib::cli::{Cli, Commands};
use app_lib::{verify_once, TerminalApp};
use auth_service_lib::{build_workflow, config::AuthServiceConfig};
use domain::Screen;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load environment variables
    match &cli.env_file {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    init_tracing(cli.verbose);

    let succeeded = match run(&cli).await {
        Ok(succeeded) => succeeded,
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            eprintln!("{}", e.user_message());
            false
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> common::AppResult<bool> {
    let config = AuthServiceConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let workflow = Arc::new(build_workflow(&config)?);

    match cli.command() {
        Commands::Run => {
            let stdin = io::stdin();
            let mut app = TerminalApp::new(workflow, stdin.lock(), io::stdout());
            let last = app.run().await?;
            Ok(last == Screen::VerificationScreen)
        }
        Commands::Verify { email } => {
            let outcome = verify_once(workflow.as_ref(), &email, &mut io::stdout()).await?;
            Ok(outcome.is_success())
        }
    }
}

/// Initialize tracing subscriber (logs go to stderr, screens to stdout)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
