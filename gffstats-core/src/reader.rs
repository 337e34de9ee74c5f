use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::GffError;
use crate::models::Feature;
use crate::parser::{ParsedLine, parse_feature_line};
use crate::utils::get_file_reader;

///
/// Streaming iterator over the [Feature] records of a GFF file.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Skipped lines are never yielded.
/// The first IO or coordinate error is yielded with its line number attached,
/// and iteration should stop there: callers are expected to propagate it
/// with `?`.
///
pub struct FeatureReader<R: BufRead> {
    reader: R,
    // last line ended in `\r`, so a leading `\n` belongs to it
    pending_cr: bool,
    lines_read: usize,
}

impl FeatureReader<BufReader<File>> {
    ///
    /// Open a GFF file on disk.
    ///
    /// # Arguments
    /// - path: path to the GFF file
    pub fn from_path(path: &Path) -> Result<Self, GffError> {
        let reader = get_file_reader(path)?;
        debug!("Reading features from {}", path.display());
        Ok(FeatureReader::new(reader))
    }
}

impl<R: BufRead> FeatureReader<R> {
    pub fn new(reader: R) -> Self {
        FeatureReader {
            reader,
            pending_cr: false,
            lines_read: 0,
        }
    }

    /// Number of lines consumed so far, skipped ones included.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Read the next line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line: Vec<u8> = Vec::new();

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let mut begin = 0;
            if self.pending_cr {
                self.pending_cr = false;
                if available[0] == b'\n' {
                    begin = 1;
                }
            }

            match available[begin..]
                .iter()
                .position(|&b| b == b'\n' || b == b'\r')
            {
                Some(offset) => {
                    let end = begin + offset;
                    line.extend_from_slice(&available[begin..end]);
                    self.pending_cr = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return bytes_to_line(line).map(Some);
                }
                None => {
                    line.extend_from_slice(&available[begin..]);
                    let consumed = available.len();
                    self.reader.consume(consumed);
                }
            }
        }

        match line.is_empty() {
            true => Ok(None),
            false => bytes_to_line(line).map(Some),
        }
    }
}

fn bytes_to_line(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

impl<R: BufRead> Iterator for FeatureReader<R> {
    type Item = Result<Feature, GffError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => return Some(Err(GffError::from(e).at_line(self.lines_read + 1))),
            };
            self.lines_read += 1;

            match parse_feature_line(&line) {
                Ok(ParsedLine::Record(feature)) => return Some(Ok(feature)),
                Ok(ParsedLine::Skipped) => continue,
                Err(e) => return Some(Err(e.at_line(self.lines_read))),
            }
        }
    }
}
