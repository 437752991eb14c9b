//! # Beam Document Files
//!
//! [`BeamDocument`]s on disk are pretty-printed JSON. Saves never leave a
//! half-written document behind, and loads refuse documents written by an
//! incompatible schema.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::document::BeamDocument;
//! use beam_core::file_io::{load_document, save_document};
//! use std::path::Path;
//!
//! let doc = BeamDocument::stair_landing_sample("Stair")?;
//! let path = Path::new("stair.json");
//!
//! save_document(&doc, path)?;
//! let loaded = load_document(path)?;
//! assert_eq!(loaded.meta.id, doc.meta.id);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::document::{BeamDocument, SCHEMA_VERSION};
use crate::errors::{BeamError, BeamResult};

/// Save a document. The JSON goes to a synced `.json.tmp` sibling first,
/// which is then renamed over `path`; a failed save leaves `path` as it was.
pub fn save_document(document: &BeamDocument, path: &Path) -> BeamResult<()> {
    let json = serde_json::to_string_pretty(document)?;
    let staging = path.with_extension("json.tmp");

    let committed = write_synced(&staging, json.as_bytes())
        .map_err(|e| (e, "write staging copy"))
        .and_then(|()| fs::rename(&staging, path).map_err(|e| (e, "replace document")));

    if let Err((e, operation)) = committed {
        let _ = fs::remove_file(&staging);
        return Err(BeamError::file_error(operation, path.display().to_string(), e.to_string()));
    }

    info!(path = %path.display(), id = %document.meta.id, "Saved beam document");
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Load a document from a file.
///
/// # Returns
///
/// * `Ok(BeamDocument)` - Successfully loaded document
/// * `Err(BeamError::VersionMismatch)` - Written by an incompatible schema
/// * `Err(BeamError::SerializationError)` - Invalid JSON or invalid loads
/// * `Err(BeamError::FileError)` - I/O error
pub fn load_document(path: &Path) -> BeamResult<BeamDocument> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))?;

    let document: BeamDocument =
        serde_json::from_str(&contents).map_err(|e| BeamError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    check_schema(&document.meta.version)?;

    debug!(
        path = %path.display(),
        label = %document.meta.label,
        load_items = document.beam.loads.len(),
        "Loaded beam document"
    );
    Ok(document)
}

/// A document is readable when its schema major matches ours. While the
/// major is 0, a newer minor is also refused.
fn check_schema(file_version: &str) -> BeamResult<()> {
    let readable = match (schema_release(file_version), schema_release(SCHEMA_VERSION)) {
        (Some((major, minor)), Some((ours_major, ours_minor))) => {
            major == ours_major && (ours_major > 0 || minor <= ours_minor)
        }
        _ => false,
    };

    if readable {
        Ok(())
    } else {
        Err(BeamError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        })
    }
}

/// `(major, minor)` of a dotted version; a missing minor reads as 0.
fn schema_release(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(|part| part.parse::<u32>().ok());
    let major = parts.next()??;
    let minor = match parts.next() {
        Some(minor) => minor?,
        None => 0,
    };
    Some((major, minor))
}
