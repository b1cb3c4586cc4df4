// squad-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files directly inside `dir` whose name ends with `.{extension}`.
///
/// Not recursive. Order is the directory listing order of the platform,
/// nothing is sorted.
pub fn list_files_with_extension(
    dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, InfrastructureError> {
    if !dir.is_dir() {
        return Err(InfrastructureError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory {:?} does not exist", dir),
        )));
    }

    let suffix = format!(".{}", extension);
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| InfrastructureError::Io(e.into()))?;
        if entry.path().is_file() && entry.file_name().to_string_lossy().ends_with(&suffix) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Write content to a file atomically.
///
/// The content goes to a temporary file in the target's directory, which is
/// then renamed over the target. Readers see either the old file or the
/// complete new one. The parent directory must already exist.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
