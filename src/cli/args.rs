//! Command line argument parsing.
//!
//! Flag names and defaults match the original exoport tool; semantic
//! validation (mpk requirements, content-source exclusivity) happens in
//! [`crate::validate`], which aggregates every problem instead of failing on
//! the first one.

use clap::Parser;
use std::path::PathBuf;

use crate::service::DEFAULT_HOST;

/// One-line usage summary printed on validation failure.
pub const USAGE: &str = "usage: exoport <-t packageType> <-a appName> <-p packageName> \
<-b buildType> <-u contentUrl|-f contentDir> <-o output> [-m model] [-r portal] \
<-c cert> <-k privkey>";

/// Packaging client for the exoport build service
#[derive(Parser, Debug)]
#[command(
    name = "exoport",
    version,
    about = "Packaging client for the exoport build service",
    long_about = "Archives application content, submits it to the remote packaging service, \
and writes the built artifact to the output path.

Usage:
  exoport -a App -p com.app -f ./app -o app.mpk -c cert.pem -k privkey.pem
  exoport -t android -b production -u https://example.com/app.zip -o app.apk

Exit code 0 = artifact written to the output path."
)]
pub struct Args {
    /// Package target: windows, macos, linux, android, mpk
    #[arg(short = 't', long = "packageType", value_name = "TYPE", default_value = "mpk")]
    pub package_type: String,

    /// Application display name (required for mpk)
    #[arg(short = 'a', long = "appName", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Reverse-domain package name (required for mpk)
    #[arg(short = 'p', long = "packageName", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Build flavor: production or debug
    #[arg(short = 'b', long = "buildType", value_name = "TYPE", default_value = "debug")]
    pub build_type: String,

    /// Local content directory to archive and upload
    #[arg(short = 'f', long = "contentDir", value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Remote content URL the service fetches server-side
    #[arg(short = 'u', long = "contentUrl", value_name = "URL")]
    pub content_url: Option<String>,

    /// Output path for the built artifact
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Model archive to bundle (mpk only)
    #[arg(short = 'm', long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Portal archive to bundle (mpk only)
    #[arg(short = 'r', long = "portal", value_name = "PATH")]
    pub portal: Option<PathBuf>,

    /// Signing certificate (required for mpk)
    #[arg(short = 'c', long = "cert", value_name = "PATH")]
    pub cert: Option<PathBuf>,

    /// Signing private key (required for mpk)
    #[arg(short = 'k', long = "privkey", value_name = "PATH")]
    pub privkey: Option<PathBuf>,

    /// Packaging service host
    #[arg(long = "host", env = "EXOPORT_HOST", default_value = DEFAULT_HOST, hide = true)]
    pub host: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
