//! Form Bundler - packages form modules into browser artifacts.
//!
//! This binary bundles one form entry point into a self-invoking script plus a
//! manifest, exiting 0 only when both have been written.

use form_bundler::cli::{self, OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let output = OutputManager::new(false);
            if output.error(&e.to_string()).is_err() {
                eprintln!("Error: {}", e);
            }
            for suggestion in e.recovery_suggestions() {
                eprintln!("  • {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
