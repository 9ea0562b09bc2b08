//! Packaging pipeline orchestration.
//!
//! One linear pass: archive the content (skipped when the content source is
//! a remote URL), submit the build request, retrieve the artifact. Each
//! phase suspends until it fully completes; any failure aborts the remaining
//! phases immediately. No retries, no rollback - partial state on the remote
//! service is left to the service.

use crate::archive;
use crate::config::{BuildConfig, ContentSource};
use crate::error::Result;
use crate::service::{ServiceClient, UploadContent};

/// Runs the full pipeline for one validated configuration.
///
/// The archive is fully materialized in memory before submission begins; the
/// multi-part request needs the total payload length up front.
pub async fn run(config: &BuildConfig, client: &ServiceClient) -> Result<()> {
    let content = match &config.content {
        ContentSource::Dir(dir) => UploadContent::Archive(archive::archive_directory(dir).await?),
        ContentSource::Url(url) => {
            log::debug!("content fetched server-side from {}", url);
            UploadContent::Url(url.clone())
        }
    };

    let result_url = client.submit(config, content).await?;
    client.retrieve(&result_url, &config.output_path).await?;

    Ok(())
}
