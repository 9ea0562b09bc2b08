//! Build configuration value objects.
//!
//! A [`BuildConfig`] is constructed exactly once by [`crate::validate`] from
//! parsed CLI arguments and is immutable from then on; every pipeline
//! component receives it by reference. There is no process-wide mutable
//! configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Packaging target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Windows,
    Macos,
    Linux,
    Android,
    /// Proprietary deployable application bundle format
    Mpk,
}

impl PackageType {
    /// Accepted CLI spellings, used in validation diagnostics.
    pub const VALID_VALUES: [&'static str; 5] = ["windows", "macos", "linux", "android", "mpk"];
}

impl FromStr for PackageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::Macos),
            "linux" => Ok(Self::Linux),
            "android" => Ok(Self::Android),
            "mpk" => Ok(Self::Mpk),
            _ => Err(format!(
                "invalid packageType: {}. Valid types: {}",
                s,
                Self::VALID_VALUES.join(", ")
            )),
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::Android => "android",
            Self::Mpk => "mpk",
        };
        write!(f, "{}", s)
    }
}

/// Build flavor requested from the packaging service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    Production,
    #[default]
    Debug,
}

impl BuildType {
    /// Accepted CLI spellings, used in validation diagnostics.
    pub const VALID_VALUES: [&'static str; 2] = ["production", "debug"];
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "production" => Ok(Self::Production),
            "debug" => Ok(Self::Debug),
            _ => Err(format!(
                "invalid buildType: {}. Valid types: {}",
                s,
                Self::VALID_VALUES.join(", ")
            )),
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Production => "production",
            Self::Debug => "debug",
        };
        write!(f, "{}", s)
    }
}

/// Where the application content comes from.
///
/// Exactly one source is allowed per invocation; the validator enforces this
/// before a `ContentSource` is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Remote URL the service fetches server-side
    Url(String),
    /// Local directory to archive and upload
    Dir(PathBuf),
}

/// Immutable, fully validated build configuration.
///
/// For `packageType=mpk`, the validator guarantees `app_name`,
/// `package_name`, `cert_path`, and `privkey_path` are all `Some`.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub package_type: PackageType,
    pub app_name: Option<String>,
    pub package_name: Option<String>,
    pub build_type: BuildType,
    pub content: ContentSource,
    pub output_path: PathBuf,
    pub model_path: Option<PathBuf>,
    pub portal_path: Option<PathBuf>,
    pub cert_path: Option<PathBuf>,
    pub privkey_path: Option<PathBuf>,
}

impl BuildConfig {
    /// Whether this build targets the mpk bundle format.
    pub fn is_mpk(&self) -> bool {
        self.package_type == PackageType::Mpk
    }
}
