//! Streaming artifact retrieval.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::ServiceClient;
use crate::error::{ExoportError, Result};

impl ServiceClient {
    /// Downloads the built artifact at `result_url` (relative to the service
    /// host) and streams it to a newly created file at `output_path`.
    ///
    /// The body is written chunk-by-chunk, never buffered whole: the artifact
    /// size is server-controlled. On any failure after the output file was
    /// created, the partial file is removed.
    pub async fn retrieve(&self, result_url: &str, output_path: &Path) -> Result<()> {
        let url = self
            .base
            .join(result_url)
            .map_err(|e| ExoportError::Service {
                reason: format!("service returned unusable artifact url {}: {}", result_url, e),
            })?;

        log::info!("downloading artifact from {}", url);
        let mut response = self.http.get(url).send().await?.error_for_status()?;

        let mut file = File::create(output_path).await?;
        let written = async {
            while let Some(chunk) = response.chunk().await? {
                file.write_all(&chunk).await?;
            }
            file.flush().await?;
            Ok::<(), ExoportError>(())
        }
        .await;

        if written.is_err() {
            // Do not leave a truncated artifact behind
            let _ = tokio::fs::remove_file(output_path).await;
        }
        written?;

        log::info!("wrote artifact to {}", output_path.display());
        Ok(())
    }
}
