use thiserror::Error;

#[derive(Error, Debug)]
pub enum GffError {
    #[error("GFF file not found: {0}")]
    FileNotFound(String),

    #[error("Can't parse {field} coordinate as an integer: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<GffError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GffError {
    ///
    /// Attach the 1-based line number the error was raised on.
    ///
    pub fn at_line(self, line: usize) -> Self {
        GffError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
