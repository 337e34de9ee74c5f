//! # Core models and parsing for gffstats
//!
//! This crate holds the pieces every other gffstats crate builds on: the
//! [Feature](models::Feature) record, the single-line parser and a streaming
//! reader over GFF files.
//!
//! ```no_run
//! use std::path::Path;
//! use gffstats_core::reader::FeatureReader;
//!
//! let reader = FeatureReader::from_path(Path::new("annotation.gff")).unwrap();
//! for feature in reader {
//!     let feature = feature.unwrap();
//!     println!("{}\t{}", feature.feature_type, feature.length());
//! }
//! ```
pub mod errors;
pub mod models;
pub mod parser;
pub mod reader;
pub mod utils;

// re-exports
pub use errors::GffError;
pub use models::{Feature, feature_length};
pub use parser::{MIN_GFF_FIELDS, ParsedLine, parse_feature_line};
pub use reader::FeatureReader;
