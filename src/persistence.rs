// File: src/persistence.rs
use crate::comparison::BatchReport;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Could not move report into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

fn is_binary(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

/// Writes the report atomically: serialize into a temp file next to the
/// target, then rename over it. `.bin` paths get bincode, anything else JSON.
pub fn save_report(report: &BatchReport, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        if is_binary(path) {
            bincode::serialize_into(&mut writer, report)?;
        } else {
            serde_json::to_writer_pretty(&mut writer, report)?;
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<BatchReport, PersistenceError> {
    let reader = BufReader::new(File::open(path)?);
    let report = if is_binary(path) {
        bincode::deserialize_from(reader)?
    } else {
        serde_json::from_reader(reader)?
    };
    Ok(report)
}
