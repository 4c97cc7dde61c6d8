//! CSV artifact writing.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{GeneratorError, Result};
use crate::types::Attraction;

/// Column header, matching the `Attraction` field order.
const CSV_HEADER: [&str; 3] = ["name", "address", "description"];

/// Render attractions as a CSV document.
///
/// The header row is always present, even for zero attractions, so the
/// artifact stays loadable by downstream tooling.
///
/// # Errors
/// Returns `GeneratorError::Csv` if serialization fails.
pub fn render_csv(attractions: &[Attraction]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for attraction in attractions {
        writer.serialize(attraction)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GeneratorError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        GeneratorError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Save attractions as a CSV file at `path`, overwriting any existing file.
///
/// Writes to a temporary file in the destination directory first and
/// renames it into place, so a failed run never leaves a partial file at
/// the destination.
///
/// # Arguments
/// * `attractions` - Records to write
/// * `path` - Destination path for the CSV file
///
/// # Returns
/// The destination path on success.
///
/// # Errors
/// Returns an error if rendering or any filesystem step fails.
pub fn save_csv(attractions: &[Attraction], path: &Path) -> Result<PathBuf> {
    let content = render_csv(attractions)?;

    let temp_path = temp_path_for(path);
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // Windows cannot rename over an existing file
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;

    info!(count = attractions.len(), path = %path.display(), "saved CSV artifact");
    Ok(path.to_path_buf())
}

/// Hidden temp file path next to the destination.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    path.with_file_name(format!(".{file_name}.tmp"))
}
