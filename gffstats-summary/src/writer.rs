use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::SummaryError;
use crate::models::FeatureStatistics;

pub trait JsonWrite {
    ///
    /// Write data to disk as pretty-printed JSON (2-space indent)
    ///
    /// Missing parent directories are created.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<(), SummaryError>;

    ///
    /// Get the pretty-printed JSON document as a string
    ///
    fn to_json_string(&self) -> Result<String, SummaryError>;
}

impl JsonWrite for FeatureStatistics {
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<(), SummaryError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // serialize first so a failure leaves no partial file behind
        let json = self.to_json_string()?;

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(())
    }

    fn to_json_string(&self) -> Result<String, SummaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
