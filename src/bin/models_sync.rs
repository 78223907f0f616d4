//! models-sync CLI
//!
//! Downloads the OpenRouter models listing and refreshes the local snapshot:
//! 1. `models.json` - response as received
//! 2. `public/models.json` - keys and named records sorted
//! 3. `package.json` - minor version bumped, patch reset
//!
//! Takes no arguments. Progress goes to stdout, errors to stderr; the exit
//! status is 1 when the run was aborted.
//!
//! Usage:
//!   cargo run --bin models-sync

use std::process::ExitCode;

use tracing::{error, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use models_sync::{ModelsSync, SyncConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing: WARN and ERROR to stderr, the rest to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("models_sync=info"))
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout))
        .with_target(false)
        .init();

    let sync = match ModelsSync::new(SyncConfig::default()) {
        Ok(sync) => sync,
        Err(e) => {
            error!(kind = e.kind(), "Error processing the file: {e}");
            return ExitCode::FAILURE;
        }
    };

    match sync.run_logged().await {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}
