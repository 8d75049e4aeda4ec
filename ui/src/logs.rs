//! Logging to the javascript console.
//!
//! Several flows report failures only here: feedback submission, saving a
//! post and deleting one. They go through [`log_failure`].

use payloads::ClientError;
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Initialize logging
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,ui=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        // already initialized by an earlier mount
        return;
    }

    tracing::info!("Initialized logs");
}

/// Log a failed API call that is not surfaced to the user.
pub fn log_failure(action: &str, error: &ClientError) {
    match error {
        ClientError::APIError(status, body) => {
            tracing::error!(%status, body = %body, "{action} failed");
        }
        ClientError::Network(e) => {
            tracing::error!("{action} failed: {e}");
        }
    }
}
