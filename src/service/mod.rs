//! HTTP client for the remote packaging service.
//!
//! The service is opaque: it is consumed only through its two-endpoint HTTP
//! contract. `POST {host}/upload` takes a multi-part form and answers with a
//! JSON object carrying a relative `url`; `GET {host}{url}` streams back the
//! built artifact.

mod retrieve;
mod submit;

use url::Url;

use crate::archive::ArchivePayload;
use crate::error::{ExoportError, Result};

/// Production service host.
pub const DEFAULT_HOST: &str = "https://exoport.webmr.io";

/// Content handed to the submitter: either a remote URL the service fetches
/// itself, or the archive bytes produced locally.
#[derive(Debug)]
pub enum UploadContent {
    Url(String),
    Archive(ArchivePayload),
}

/// Client for one packaging-service instance.
///
/// Holds a single `reqwest::Client`; plain or TLS transport follows the
/// scheme of the configured host URL.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base: Url,
    upload: Url,
}

impl ServiceClient {
    /// Creates a client for the service at `host` (scheme included).
    pub fn new(host: &str) -> Result<Self> {
        let base = Url::parse(host).map_err(|e| ExoportError::Service {
            reason: format!("invalid service host {}: {}", host, e),
        })?;
        let upload = base.join("/upload").map_err(|e| ExoportError::Service {
            reason: format!("invalid service host {}: {}", host, e),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base,
            upload,
        })
    }

    /// The service base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }
}
