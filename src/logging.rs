//! Logging initialization
//!
//! Opt-in tracing setup for embedding hosts. Log output goes to a temp file
//! so the console UI keeps stdout/stderr to itself. Audit events from the
//! actions layer are emitted under the `audit` target and end up in the same
//! subscriber.

use std::path::PathBuf;

/// Initialize logging based on the debug flag.
/// Returns the log file path if debug logging is enabled.
pub fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        // No logging by default (silent operation)
        return None;
    }

    // Named temp file so the path can be reported to the user
    let temp_file = tempfile::Builder::new()
        .prefix("tokenview-")
        .suffix(".log")
        .tempfile()
        .map(|f| {
            let path = f.path().to_path_buf();
            // Keep the file alive for the process lifetime; the OS cleans it up
            std::mem::forget(f);
            path
        })
        .unwrap_or_else(|_| {
            let temp_dir = std::env::temp_dir();
            temp_dir.join(format!("tokenview-{}.log", std::process::id()))
        });

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&temp_file)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", temp_file.display(), e);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(temp_file)
}
