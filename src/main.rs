//! Exoport - packaging client for the exoport build service.
//!
//! This binary archives application content, submits it to the remote
//! packaging service over HTTP, and downloads the resulting build artifact.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match exoport::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
