//! In-memory content archiving.
//!
//! Produces a ZIP archive of a directory tree, buffered completely in memory
//! because the multi-part upload needs the total payload length up front.
//! This is an intentional non-streaming trade-off: the content is a
//! client-authored app bundle, not an arbitrarily large server payload.

use std::io::{self, Cursor};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ExoportError, Result};

/// A finished in-memory archive, rooted at the archived directory's contents.
///
/// Produced by [`archive_directory`], consumed once by the submitter.
#[derive(Debug)]
pub struct ArchivePayload {
    /// Complete ZIP bytes
    pub bytes: Vec<u8>,
}

impl ArchivePayload {
    /// Total archive size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the archive holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Archives the contents of a directory into an in-memory ZIP.
///
/// Entry names are relative to `path` itself, so unpacking the archive
/// reproduces the directory's contents without an extra top-level folder.
/// Fails with [`ExoportError::NotADirectory`] if `path` does not exist or is
/// not a directory; any unreadable entry aborts the whole archive.
pub async fn archive_directory(path: &Path) -> Result<ArchivePayload> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => {}
        _ => {
            return Err(ExoportError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
    }

    log::info!("archiving {}", path.display());

    // Clone path for move into blocking closure
    let root = path.to_path_buf();

    // Offload blocking walk-and-compress work to dedicated thread pool
    let payload = tokio::task::spawn_blocking(move || build_archive(root.as_path()))
        .await
        .map_err(|e| io::Error::other(format!("archive task panicked: {}", e)))??;

    log::debug!("archive finished: {} bytes", payload.len());
    Ok(payload)
}

/// Walks `root` and writes every entry into a ZIP buffered in memory.
///
/// Uses Deflate at maximum compression; zip64 is enabled so entry sizes are
/// not capped at 4 GiB.
fn build_archive(root: &Path) -> Result<ArchivePayload> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9))
        .large_file(true);

    for entry in walkdir::WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let rel_path = entry
            .path()
            .strip_prefix(root)
            .map_err(io::Error::other)?;
        if rel_path.as_os_str().is_empty() {
            // The root directory itself is the archive root, not an entry
            continue;
        }

        // ZIP entry names always use forward slashes
        let name = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut file = std::fs::File::open(entry.path())?;
            io::copy(&mut file, &mut writer)?;
        }
    }

    let cursor = writer.finish()?;
    Ok(ArchivePayload {
        bytes: cursor.into_inner(),
    })
}
