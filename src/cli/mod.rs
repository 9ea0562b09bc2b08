//! Command line interface for the exoport packaging client.
//!
//! Parses arguments, validates them into an immutable configuration, and
//! drives the packaging pipeline. Validation failures never reach the
//! network: every problem plus a usage summary goes to stderr and the
//! process exits with code 2.

mod args;

pub use args::{Args, USAGE};

use crate::error::Result;
use crate::service::ServiceClient;
use crate::{pipeline, validate};

/// Main CLI entry point; returns the process exit code.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    let config = match validate::validate(&args) {
        Ok(config) => config,
        Err(problems) => {
            for problem in &problems {
                eprintln!("{}", problem);
            }
            eprintln!("{}", USAGE);
            return Ok(2);
        }
    };

    log::debug!(
        "building {} ({}) for {}",
        config.app_name.as_deref().unwrap_or("<unnamed>"),
        config.build_type,
        config.package_type
    );

    let client = ServiceClient::new(&args.host)?;
    pipeline::run(&config, &client).await?;

    Ok(0)
}
