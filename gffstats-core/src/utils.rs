use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::GffError;

///
/// Fail with [GffError::FileNotFound] unless something exists at `path`.
///
pub fn ensure_file_exists(path: &Path) -> Result<(), GffError> {
    match path.exists() {
        true => Ok(()),
        false => Err(GffError::FileNotFound(path.display().to_string())),
    }
}

///
/// Get a buffered reader for a plain-text annotation file.
///
/// The existence check runs before the file is opened, so a missing input is
/// reported as [GffError::FileNotFound] rather than a raw IO error.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_file_reader(path: &Path) -> Result<BufReader<File>, GffError> {
    ensure_file_exists(path)?;
    let file = File::open(path)?;

    Ok(BufReader::new(file))
}
